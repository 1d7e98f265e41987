use crate::models::{AuditStatus, Bill};
use crate::service::{MasterState, Selection};
use serde::Serialize;

/// 第一行表头: (分组名, 跨列数)
pub const COLUMN_GROUPS: [(&str, usize); 5] = [
    ("", 1),
    ("Bill", 4),
    ("Period", 3),
    ("Charges", 2),
    ("Audit", 1),
];

/// 第二行表头；第一列放全选复选框
pub const COLUMN_LABELS: [&str; 11] = [
    "",
    "ID",
    "Station ID",
    "Radio Station",
    "Year",
    "Reported",
    "Bill Start",
    "Bill End",
    "Transit",
    "Cost Multiplier",
    "Audit Status",
];

/// 固定的表头行数
pub const HEADER_ROWS: usize = 2;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderGroup {
    pub title: &'static str,
    pub span: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRow {
    pub id: i64,
    pub checked: bool,
    pub status: AuditStatus,
    /// 复选框之后的各列显示文本，与 `COLUMN_LABELS[1..]` 对应
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow {
    ColumnGroups { groups: Vec<HeaderGroup> },
    ColumnLabels { master: MasterState, labels: Vec<&'static str> },
    Bill(BillRow),
}

/// 审批表格的投影结果 (只读)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillTable {
    pub rows: Vec<TableRow>,
    pub master: MasterState,
    /// 选择集为空时两个操作按钮不可用
    pub actions_enabled: bool,
}

impl BillTable {
    pub fn project(bills: &[Bill], selection: &Selection) -> Self {
        let master = selection.master_state();

        let mut rows = Vec::with_capacity(HEADER_ROWS + bills.len());
        rows.push(TableRow::ColumnGroups {
            groups: COLUMN_GROUPS
                .iter()
                .map(|&(title, span)| HeaderGroup { title, span })
                .collect(),
        });
        rows.push(TableRow::ColumnLabels {
            master,
            labels: COLUMN_LABELS.to_vec(),
        });
        rows.extend(bills.iter().map(|bill| {
            TableRow::Bill(BillRow {
                id: bill.id,
                checked: selection.is_selected(bill.id),
                status: bill.audit_status,
                cells: bill_cells(bill),
            })
        }));

        Self {
            rows,
            master,
            actions_enabled: !selection.is_empty(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn bill_rows(&self) -> impl Iterator<Item = &BillRow> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Bill(bill) => Some(bill),
            _ => None,
        })
    }
}

fn bill_cells(bill: &Bill) -> Vec<String> {
    vec![
        bill.id.to_string(),
        bill.sid.to_string(),
        bill.stations.clone(),
        bill.year.to_string(),
        bill.report_dtm.format(DATE_FORMAT).to_string(),
        bill.bill_start.format(DATE_FORMAT).to_string(),
        bill.bill_end.format(DATE_FORMAT).to_string(),
        bill.bill_transit.to_string(),
        bill.cost_mult.to_string(),
        bill.audit_status.label().to_string(),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};

    pub(crate) fn bill(id: i64, audit_status: AuditStatus) -> Bill {
        Bill {
            id,
            report_dtm: Utc.with_ymd_and_hms(2020, 11, 4, 17, 39, 21).unwrap(),
            bill_start: Utc.with_ymd_and_hms(2020, 11, 4, 17, 39, 22).unwrap(),
            bill_end: Utc.with_ymd_and_hms(2020, 11, 4, 17, 39, 23).unwrap(),
            audit_status,
            bill_transit: BigDecimal::from(2),
            cost_mult: BigDecimal::from(2),
            sid: 1,
            stations: "WCPE".to_string(),
            year: 2020,
        }
    }

    fn project(bills: &[Bill]) -> (BillTable, Selection) {
        let selection = Selection::new(bills.iter().map(|b| b.id));
        (BillTable::project(bills, &selection), selection)
    }

    #[test]
    fn header_widths_match_labels() {
        let span: usize = COLUMN_GROUPS.iter().map(|(_, span)| span).sum();
        assert_eq!(span, COLUMN_LABELS.len());
    }

    #[test]
    fn no_bills_renders_headers_only() {
        let (table, _) = project(&[]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.master, MasterState::Unchecked);
        assert!(!table.actions_enabled);
        assert!(matches!(table.rows[1], TableRow::ColumnLabels { ref labels, .. } if labels.contains(&"Radio Station")));
    }

    #[test]
    fn one_row_per_bill() {
        for n in 0..5 {
            let bills: Vec<Bill> = (1..=n).map(|id| bill(id, AuditStatus::Processing)).collect();
            let (table, _) = project(&bills);
            assert_eq!(table.bill_rows().count(), n as usize);
            assert_eq!(table.row_count(), n as usize + 2);
        }
    }

    #[test]
    fn mixed_statuses_render_unchecked() {
        let bills = vec![
            bill(1, AuditStatus::Processing),
            bill(2, AuditStatus::Processed),
            bill(3, AuditStatus::Unusable),
        ];
        let (table, _) = project(&bills);

        assert_eq!(table.row_count(), 5);
        assert!(table.bill_rows().all(|row| !row.checked));
        let labels: Vec<_> = table.bill_rows().map(|row| row.cells[9].as_str()).collect();
        assert_eq!(labels, ["Pending", "Processed", "Rejected"]);
    }

    #[test]
    fn rows_follow_selection() {
        let bills = vec![bill(1, AuditStatus::Processing), bill(2, AuditStatus::Processing)];
        let (_, mut selection) = project(&bills);
        selection.toggle_row(2);

        let table = BillTable::project(&bills, &selection);
        let checked: Vec<_> = table.bill_rows().map(|row| row.checked).collect();
        assert_eq!(checked, [false, true]);
        assert_eq!(table.master, MasterState::Indeterminate);
        assert!(table.actions_enabled);

        selection.toggle_all();
        selection.toggle_all();
        let table = BillTable::project(&bills, &selection);
        assert!(table.bill_rows().all(|row| row.checked));
        assert_eq!(table.master, MasterState::Checked);
    }

    #[test]
    fn cells_format_display_fields() {
        let (table, _) = project(&[bill(1, AuditStatus::Processing)]);
        let row = table.bill_rows().next().unwrap();
        assert_eq!(row.cells.len(), COLUMN_LABELS.len() - 1);
        assert_eq!(row.cells[2], "WCPE");
        assert_eq!(row.cells[4], "2020-11-04 17:39:21");
        assert_eq!(row.cells[7], "2");
    }
}
