mod workbook_vm;

pub use workbook_vm::{
    auto_print_should_fire, page_position_label, print_page_label, progress_percent,
    total_score_label,
};
