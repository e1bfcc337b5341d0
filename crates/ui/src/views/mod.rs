pub mod workbook;

pub use workbook::WorkbookView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
