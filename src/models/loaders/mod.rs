pub mod table_loader;

pub use table_loader::{load_table, TableRow, COLUMN_AWS_URL, COLUMN_GDOC_URL};
