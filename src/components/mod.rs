pub mod account_form;
pub mod account_list;
pub mod auth_form;
pub mod csv_importer;
pub mod dashboard;
pub mod expense_sharing;
pub mod filter_bar;
pub mod icons;
pub mod monthly_report;
