/// One record of the `transactions` table as read back for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub account_number: String,
    pub description: String,
    pub transaction_date: String,
    pub transaction_type: String,
    pub transaction_amount: f64,
    pub balance: f64,
}

/// Raw CSV record: the fields exactly as they appeared in the file.
pub type CsvRow = Vec<String>;
