pub mod power_menu;
