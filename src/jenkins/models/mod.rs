pub mod build_report;
