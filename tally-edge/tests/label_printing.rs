//! Label print service against in-memory and file sinks

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::InventoryItem;
use tally_edge::labels::{Catalog, LabelCompiler, LabelLayout, LabelPrinter, ValidationError};
use tally_edge::EdgeError;
use tally_printer::{CommandLanguage, FileSink, MemorySink, PrintError};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn catalog() -> Catalog {
    Catalog::from_items([
        InventoryItem::new("GMS-1001", Decimal::from_str("19.995").unwrap())
            .with_description("Galvanized sheet 4x8")
            .with_location("A-12-3-B")
            .with_unit("EA")
            .with_category("Sheet"),
        InventoryItem::new("GMS-2002", Decimal::from_str("3.1").unwrap())
            .with_description("Angle iron 2x2")
            .with_unit("FT")
            .with_category("Structural"),
    ])
}

fn printer(sink: MemorySink) -> LabelPrinter<MemorySink> {
    LabelPrinter::new(LabelCompiler::default(), CommandLanguage::Zpl, sink)
}

#[tokio::test]
async fn test_print_by_id_sends_one_label() {
    let p = printer(MemorySink::new());
    let sent = p.print_by_id(&catalog(), "GMS-1001", 4, date()).await.unwrap();

    let jobs = p.sink().jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].len(), sent);

    let zpl = String::from_utf8(jobs[0].clone()).unwrap();
    assert!(zpl.starts_with("^XA\n^LH0,0\n"));
    assert!(zpl.ends_with("^XZ"));
    assert!(zpl.contains("^FDQty: 4 EA^FS"));
    assert!(zpl.contains("^FDQA,ID:GMS-1001|QTY:4|LOC:A-12-3-B|PRICE:20.00^FS"));
}

#[tokio::test]
async fn test_item_without_location_has_no_location_region() {
    let p = printer(MemorySink::new());
    p.print_by_id(&catalog(), "GMS-2002", 1, date()).await.unwrap();

    let zpl = String::from_utf8(p.sink().jobs().remove(0)).unwrap();
    assert!(!zpl.contains("^FO500,30"));
    assert!(!zpl.contains("Loc:"));
    assert!(zpl.contains("^FDPrice: $3.10^FS"));
    assert!(zpl.contains("|LOC:|"));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let p = printer(MemorySink::new());
    let err = p.print_by_id(&catalog(), "GMS-1001", 0, date()).await.unwrap_err();
    assert!(matches!(
        err,
        EdgeError::Validation(ValidationError::InvalidQuantity(0))
    ));
    assert_eq!(p.sink().job_count(), 0);
}

#[tokio::test]
async fn test_unknown_item() {
    let p = printer(MemorySink::new());
    let err = p.print_by_id(&catalog(), "NOPE", 1, date()).await.unwrap_err();
    assert!(matches!(err, EdgeError::UnknownItem(ref id) if id == "NOPE"));
    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn test_sink_error_is_reported() {
    let p = printer(MemorySink::rejecting("head open"));
    let err = p.print_by_id(&catalog(), "GMS-1001", 1, date()).await.unwrap_err();
    assert!(matches!(err, EdgeError::Print(PrintError::Rejected(_))));
}

#[tokio::test]
async fn test_file_sink_spools_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.zpl");
    let p = LabelPrinter::new(
        LabelCompiler::new(LabelLayout::default()),
        CommandLanguage::ZplWindows1252,
        FileSink::new(&path).unwrap(),
    );
    let cat = catalog();
    p.print_by_id(&cat, "GMS-1001", 1, date()).await.unwrap();
    p.print_by_id(&cat, "GMS-2002", 1, date()).await.unwrap();

    let spooled = std::fs::read(&path).unwrap();
    let text = String::from_utf8_lossy(&spooled);
    assert_eq!(text.matches("^XA\n^CI27\n").count(), 2);
    assert_eq!(text.matches("^XZ").count(), 2);
}
