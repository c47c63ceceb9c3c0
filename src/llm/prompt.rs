/// 表头字段 (发票号映射为 SalesOrderNumber)
pub const HEADER_KEYS: &str = "OrderDate, DueDate, ShipDate, Invoice Number as SalesOrderNumber, AccountNumber, Subtotal, TaxAmt, Freight, TotalDue";

/// 明细字段
pub const DETAIL_KEYS: &str = "ProductID, OrderQty, UnitPrice, LineTotal";

/// 识别提示词，启动时生成一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPrompt {
    text: String,
}

impl ExtractionPrompt {
    pub fn new(header_keys: &str, detail_keys: &str) -> Self {
        let text = format!(
            "Extract the following fields from the above invoice PDF as a JSON object. \
             Provide raw JSON only. Do not include markdown formatting or backticks. \
             Provide two objects, one object named headers and an array containing detailKey \
             objects for each row in the invoice named details: {header_keys}, {detail_keys}"
        );
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for ExtractionPrompt {
    fn default() -> Self {
        Self::new(HEADER_KEYS, DETAIL_KEYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_every_field() {
        let prompt = ExtractionPrompt::default();
        for field in [
            "OrderDate", "DueDate", "ShipDate", "SalesOrderNumber", "AccountNumber",
            "Subtotal", "TaxAmt", "Freight", "TotalDue",
            "ProductID", "OrderQty", "UnitPrice", "LineTotal",
        ] {
            assert!(prompt.as_str().contains(field), "missing {field}");
        }
    }

    #[test]
    fn asks_for_raw_json_shape() {
        let prompt = ExtractionPrompt::default();
        assert!(prompt.as_str().contains("Provide raw JSON only"));
        assert!(prompt.as_str().contains("Do not include markdown formatting or backticks"));
        assert!(prompt.as_str().contains("named headers"));
        assert!(prompt.as_str().contains("named details"));
        assert!(prompt.as_str().ends_with("TotalDue, ProductID, OrderQty, UnitPrice, LineTotal"));
    }
}
