use super::FieldValue;
use serde::{Deserialize, Serialize};

/// 发票表头 (invoices)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceHeader {
    pub order_date: FieldValue,
    pub due_date: FieldValue,
    pub ship_date: FieldValue,
    pub sales_order_number: FieldValue,
    pub account_number: FieldValue,
    pub subtotal: FieldValue,
    pub tax_amt: FieldValue,
    pub freight: FieldValue,
    pub total_due: FieldValue,
}

/// 发票明细行 (invoice_details)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceDetail {
    #[serde(rename = "ProductID")]
    pub product_id: FieldValue,
    pub order_qty: FieldValue,
    pub unit_price: FieldValue,
    pub line_total: FieldValue,
}

/// 提交请求体: {headers, details}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSubmission {
    pub headers: InvoiceHeader,
    pub details: Vec<InvoiceDetail>,
}

impl InvoiceSubmission {
    /// 解析请求体，任何缺失字段都在写库之前报错
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "headers": {
                "OrderDate": "2024-01-01",
                "DueDate": "2024-01-31",
                "ShipDate": "2024-01-02",
                "SalesOrderNumber": "SO123",
                "AccountNumber": "ACC1",
                "Subtotal": 100.0,
                "TaxAmt": 8.0,
                "Freight": 5.0,
                "TotalDue": 113.0
            },
            "details": [
                {"ProductID": 1, "OrderQty": 2, "UnitPrice": 50.0, "LineTotal": 100.0}
            ]
        })
    }

    #[test]
    fn parses_pascal_case_keys() {
        let body = serde_json::to_vec(&sample()).unwrap();
        let submission = InvoiceSubmission::from_slice(&body).unwrap();

        assert_eq!(submission.headers.sales_order_number, FieldValue::from("SO123"));
        assert_eq!(submission.headers.total_due, FieldValue::Real(113.0));
        assert_eq!(submission.details.len(), 1);
        assert_eq!(submission.details[0].product_id, FieldValue::Integer(1));
        assert_eq!(submission.details[0].line_total, FieldValue::Real(100.0));
    }

    #[test]
    fn missing_header_field_is_rejected() {
        let mut value = sample();
        value["headers"].as_object_mut().unwrap().remove("TaxAmt");
        let body = serde_json::to_vec(&value).unwrap();

        let err = InvoiceSubmission::from_slice(&body).unwrap_err();
        assert!(err.to_string().contains("TaxAmt"));
    }

    #[test]
    fn missing_detail_field_is_rejected() {
        let mut value = sample();
        value["details"][0].as_object_mut().unwrap().remove("ProductID");
        let body = serde_json::to_vec(&value).unwrap();

        let err = InvoiceSubmission::from_slice(&body).unwrap_err();
        assert!(err.to_string().contains("ProductID"));
    }

    #[test]
    fn null_field_is_kept() {
        let mut value = sample();
        value["headers"]["ShipDate"] = serde_json::Value::Null;
        let body = serde_json::to_vec(&value).unwrap();

        let submission = InvoiceSubmission::from_slice(&body).unwrap();
        assert_eq!(submission.headers.ship_date, FieldValue::Null);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut value = sample();
        value["extra"] = json!("ignored");
        value["headers"]["Currency"] = json!("USD");
        let body = serde_json::to_vec(&value).unwrap();

        assert!(InvoiceSubmission::from_slice(&body).is_ok());
    }
}
