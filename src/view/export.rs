use crate::error::Result;
use crate::models::Bill;

/// 导出当前已加载的账单为 CSV (列名与接口字段一致)
pub fn bills_to_csv(bills: &[Bill]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for bill in bills {
        writer.serialize(bill)?;
    }
    writer
        .into_inner()
        .map_err(|e| e.into_error().into())
}
