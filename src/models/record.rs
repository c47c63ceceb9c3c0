use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// invoices 表中已存储的一行
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StoredInvoice {
    pub id: i64,
    #[sqlx(rename = "OrderDate")]
    pub order_date: Option<String>,
    #[sqlx(rename = "DueDate")]
    pub due_date: Option<String>,
    #[sqlx(rename = "ShipDate")]
    pub ship_date: Option<String>,
    #[sqlx(rename = "SalesOrderNumber")]
    pub sales_order_number: Option<String>,
    #[sqlx(rename = "AccountNumber")]
    pub account_number: Option<String>,
    #[sqlx(rename = "Subtotal")]
    pub subtotal: Option<f64>,
    #[sqlx(rename = "TaxAmt")]
    pub tax_amt: Option<f64>,
    #[sqlx(rename = "Freight")]
    pub freight: Option<f64>,
    #[sqlx(rename = "TotalDue")]
    pub total_due: Option<f64>,
}

/// invoice_details 表中已存储的一行
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StoredInvoiceDetail {
    pub id: i64,
    pub invoice_id: Option<i64>,
    #[sqlx(rename = "ProductID")]
    pub product_id: Option<i64>,
    #[sqlx(rename = "OrderQty")]
    pub order_qty: Option<i64>,
    #[sqlx(rename = "UnitPrice")]
    pub unit_price: Option<f64>,
    #[sqlx(rename = "LineTotal")]
    pub line_total: Option<f64>,
}
