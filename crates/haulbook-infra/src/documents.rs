//! JSON document loaders
//!
//! Documents are exports of the ops API: a subtrip collection, a single
//! invoice, or a single transporter payment, each as one JSON file.

use std::path::Path;

use haulbook_domain::model::{Invoice, Subtrip, TransporterPayment};
use haulbook_types::{Error, Result};

/// Load a subtrip collection from a JSON file
pub fn load_subtrips(path: &Path) -> Result<Vec<Subtrip>> {
    let content = read_document(path)?;
    let subtrips: Vec<Subtrip> = serde_json::from_str(&content)?;
    Ok(subtrips)
}

/// Load an invoice document from a JSON file
pub fn load_invoice(path: &Path) -> Result<Invoice> {
    let content = read_document(path)?;
    let invoice: Invoice = serde_json::from_str(&content)?;
    Ok(invoice)
}

/// Load a transporter payment document from a JSON file
pub fn load_transporter_payment(path: &Path) -> Result<TransporterPayment> {
    let content = read_document(path)?;
    let payment: TransporterPayment = serde_json::from_str(&content)?;
    Ok(payment)
}

fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_subtrips_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subtrips.json");
        std::fs::write(
            &path,
            r#"[{"_id": "ST-1", "rate": 900, "expenses": [{"expenseType": "toll", "amount": 120}]}]"#,
        )
        .unwrap();

        let subtrips = load_subtrips(&path).unwrap();
        assert_eq!(subtrips.len(), 1);
        assert_eq!(subtrips[0].subtrip_id, "ST-1");
        assert_eq!(subtrips[0].expenses.len(), 1);
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = load_subtrips(Path::new("/nonexistent/subtrips.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_subtrips(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_invoice_and_payment() {
        let dir = tempfile::tempdir().unwrap();

        let invoice_path = dir.path().join("invoice.json");
        std::fs::write(
            &invoice_path,
            r#"{"_id": "INV-7", "invoicedSubTrips": [{"loadingWeight": 10, "rate": 1000}]}"#,
        )
        .unwrap();
        let invoice = load_invoice(&invoice_path).unwrap();
        assert_eq!(invoice.invoice_no, "INV-7");
        assert_eq!(invoice.invoiced_sub_trips.len(), 1);

        let payment_path = dir.path().join("payment.json");
        std::fs::write(
            &payment_path,
            r#"{"_id": "TP-3", "associatedSubtrips": [], "repayments": [{"amount": 500}]}"#,
        )
        .unwrap();
        let payment = load_transporter_payment(&payment_path).unwrap();
        assert_eq!(payment.payment_no, "TP-3");
        assert_eq!(payment.repayments.len(), 1);
    }
}
