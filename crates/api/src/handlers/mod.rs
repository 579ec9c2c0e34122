pub mod reference_import;
