use crate::models::{FieldValue, InvoiceDetail, InvoiceHeader, StoredInvoice, StoredInvoiceDetail};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqliteConnection;

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// 按 JSON 原始类型绑定参数，类型转换交给 SQLite
fn bind_field<'q>(query: SqliteQuery<'q>, value: &'q FieldValue) -> SqliteQuery<'q> {
    match value {
        FieldValue::Integer(v) => query.bind(*v),
        FieldValue::Real(v) => query.bind(*v),
        FieldValue::Bool(v) => query.bind(*v),
        FieldValue::Text(v) => query.bind(v.as_str()),
        FieldValue::Null => query.bind(None::<String>),
    }
}

/// 插入发票表头，返回自增ID
pub async fn insert_invoice(
    conn: &mut SqliteConnection,
    header: &InvoiceHeader,
) -> Result<i64, sqlx::Error> {
    let query = sqlx::query(
        r#"
        INSERT INTO invoices (OrderDate, DueDate, ShipDate, SalesOrderNumber, AccountNumber,
                              Subtotal, TaxAmt, Freight, TotalDue)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    );

    let query = [
        &header.order_date,
        &header.due_date,
        &header.ship_date,
        &header.sales_order_number,
        &header.account_number,
        &header.subtotal,
        &header.tax_amt,
        &header.freight,
        &header.total_due,
    ]
    .into_iter()
    .fold(query, bind_field);

    let result = query.execute(&mut *conn).await?;
    Ok(result.last_insert_rowid())
}

/// 插入一条明细行
pub async fn insert_detail(
    conn: &mut SqliteConnection,
    invoice_id: i64,
    detail: &InvoiceDetail,
) -> Result<(), sqlx::Error> {
    let query = sqlx::query(
        r#"
        INSERT INTO invoice_details (invoice_id, ProductID, OrderQty, UnitPrice, LineTotal)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(invoice_id);

    let query = [
        &detail.product_id,
        &detail.order_qty,
        &detail.unit_price,
        &detail.line_total,
    ]
    .into_iter()
    .fold(query, bind_field);

    query.execute(&mut *conn).await?;
    Ok(())
}

// 以下读取函数仅供测试核对写入结果

#[doc(hidden)]
/// 查询发票表头
pub async fn get_invoice(
    conn: &mut SqliteConnection,
    invoice_id: i64,
) -> Result<Option<StoredInvoice>, sqlx::Error> {
    sqlx::query_as::<_, StoredInvoice>(
        r#"
        SELECT id, OrderDate, DueDate, ShipDate, SalesOrderNumber, AccountNumber,
               Subtotal, TaxAmt, Freight, TotalDue
        FROM invoices
        WHERE id = ?
        "#,
    )
    .bind(invoice_id)
    .fetch_optional(conn)
    .await
}

#[doc(hidden)]
/// 查询发票明细列表
pub async fn list_invoice_details(
    conn: &mut SqliteConnection,
    invoice_id: i64,
) -> Result<Vec<StoredInvoiceDetail>, sqlx::Error> {
    sqlx::query_as::<_, StoredInvoiceDetail>(
        r#"
        SELECT id, invoice_id, ProductID, OrderQty, UnitPrice, LineTotal
        FROM invoice_details
        WHERE invoice_id = ?
        ORDER BY id
        "#,
    )
    .bind(invoice_id)
    .fetch_all(conn)
    .await
}

#[doc(hidden)]
/// 统计两张表的行数 (invoices, invoice_details)
pub async fn count_rows(conn: &mut SqliteConnection) -> Result<(i64, i64), sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT (SELECT COUNT(*) FROM invoices),
               (SELECT COUNT(*) FROM invoice_details)
        "#,
    )
    .fetch_one(conn)
    .await
}
