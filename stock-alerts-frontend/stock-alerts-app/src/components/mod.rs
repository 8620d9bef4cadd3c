pub mod alert_card;
pub mod alert_sections;
pub mod email_form;
pub mod loading;
pub mod period_card;
pub mod request_stock;
pub mod search_bar;
pub mod status_line;
pub mod stock_grid;
