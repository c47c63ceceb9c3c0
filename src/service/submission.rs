use crate::db::{queries, ConnectionManager, ConnectionScope};
use crate::models::InvoiceSubmission;
use sqlx::{Connection, SqliteConnection};

/// 提交服务: 写入一张发票表头及其明细
pub struct SubmissionService {
    connections: ConnectionManager,
    atomic: bool,
}

impl SubmissionService {
    /// `atomic` 为 true 时表头与明细在同一事务中写入
    pub fn new(connections: ConnectionManager, atomic: bool) -> Self {
        Self { connections, atomic }
    }

    pub fn open_scope(&self) -> ConnectionScope {
        self.connections.scope()
    }

    /// 写入表头与明细，返回表头ID
    pub async fn submit(
        &self,
        scope: &mut ConnectionScope,
        submission: &InvoiceSubmission,
    ) -> Result<i64, sqlx::Error> {
        let conn = scope.get().await?;

        let invoice_id = if self.atomic {
            let mut tx = conn.begin().await?;
            let invoice_id = write_invoice(&mut *tx, submission).await?;
            tx.commit().await?;
            invoice_id
        } else {
            // 非事务模式: 每条语句自动提交，明细中途失败会留下孤立表头与部分明细
            write_invoice(conn, submission).await?
        };

        tracing::info!(
            "✓ 发票 {} 写入成功, 明细 {} 行",
            invoice_id,
            submission.details.len()
        );
        Ok(invoice_id)
    }
}

async fn write_invoice(
    conn: &mut SqliteConnection,
    submission: &InvoiceSubmission,
) -> Result<i64, sqlx::Error> {
    let invoice_id = queries::insert_invoice(conn, &submission.headers).await?;
    for detail in &submission.details {
        queries::insert_detail(conn, invoice_id, detail).await?;
    }
    Ok(invoice_id)
}
