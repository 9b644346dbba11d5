pub mod login_form;
pub mod nutrition_report;
pub mod review_table;
