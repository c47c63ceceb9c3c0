use super::ConnectionManager;
use sqlx::SqliteConnection;

const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        OrderDate TEXT,
        DueDate TEXT,
        ShipDate TEXT,
        SalesOrderNumber TEXT,
        AccountNumber TEXT,
        Subtotal REAL,
        TaxAmt REAL,
        Freight REAL,
        TotalDue REAL
    )
"#;

const CREATE_INVOICE_DETAILS: &str = r#"
    CREATE TABLE IF NOT EXISTS invoice_details (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        invoice_id INTEGER,
        ProductID INTEGER,
        OrderQty INTEGER,
        UnitPrice REAL,
        LineTotal REAL,
        FOREIGN KEY(invoice_id) REFERENCES invoices(id)
    )
"#;

/// 建表 (幂等)，每次启动及 init-db 命令都会调用
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_INVOICES).execute(&mut *conn).await?;
    sqlx::query(CREATE_INVOICE_DETAILS).execute(&mut *conn).await?;
    tracing::info!("Initialized the database.");
    Ok(())
}

/// init-db 命令: 在独立的连接作用域中建表
pub async fn init_db(connections: &ConnectionManager) -> Result<(), sqlx::Error> {
    let mut scope = connections.scope();
    init_schema(scope.get().await?).await?;
    scope.close().await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn user_tables(conn: &mut SqliteConnection) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )
        .fetch_all(conn)
        .await
        .unwrap()
    }

    async fn columns(conn: &mut SqliteConnection, table: &str) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
            .bind(table)
            .fetch_all(conn)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("schema.db").display());
        let manager = ConnectionManager::new(&url).unwrap();
        let mut scope = manager.scope();
        let conn = scope.get().await.unwrap();

        init_schema(conn).await.unwrap();
        let tables_once = user_tables(conn).await;
        let invoice_cols_once = columns(conn, "invoices").await;
        let detail_cols_once = columns(conn, "invoice_details").await;

        init_schema(conn).await.unwrap();
        assert_eq!(user_tables(conn).await, tables_once);
        assert_eq!(columns(conn, "invoices").await, invoice_cols_once);
        assert_eq!(columns(conn, "invoice_details").await, detail_cols_once);

        assert_eq!(tables_once, vec!["invoice_details", "invoices"]);
        assert_eq!(
            invoice_cols_once,
            vec![
                "id", "OrderDate", "DueDate", "ShipDate", "SalesOrderNumber",
                "AccountNumber", "Subtotal", "TaxAmt", "Freight", "TotalDue",
            ]
        );
        assert_eq!(
            detail_cols_once,
            vec!["id", "invoice_id", "ProductID", "OrderQty", "UnitPrice", "LineTotal"]
        );
        scope.close().await.unwrap();
    }

    #[tokio::test]
    async fn details_reference_invoices() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("fk.db").display());
        let manager = ConnectionManager::new(&url).unwrap();
        let mut scope = manager.scope();
        let conn = scope.get().await.unwrap();
        init_schema(conn).await.unwrap();

        let orphan = sqlx::query("INSERT INTO invoice_details (invoice_id, ProductID) VALUES (42, 1)")
            .execute(&mut *conn)
            .await;
        assert!(orphan.is_err());
        scope.close().await.unwrap();
    }

    #[tokio::test]
    async fn init_db_command_runs_twice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.db");
        let manager = ConnectionManager::new(&format!("sqlite://{}", path.display())).unwrap();

        init_db(&manager).await.unwrap();
        assert!(path.exists());
        init_db(&manager).await.unwrap();

        let mut scope = manager.scope();
        let conn = scope.get().await.unwrap();
        assert_eq!(user_tables(conn).await, vec!["invoice_details", "invoices"]);
        let rows: (i64, i64) = crate::db::count_rows(conn).await.unwrap();
        assert_eq!(rows, (0, 0));
        scope.close().await.unwrap();
    }
}
