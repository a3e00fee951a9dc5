pub mod account_badge;
pub mod app;
pub mod aquarium_view;
pub mod bubbles;
pub mod draggable_animal;
pub mod login_screen;
pub mod project_detail_modal;
pub mod project_panel;
pub mod save_notice;
pub mod tx_status;
