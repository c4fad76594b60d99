pub mod header;
pub mod status_indicator;
pub mod mode_tabs;
pub mod entity_picker;
pub mod results_panel;
pub mod match_card;
