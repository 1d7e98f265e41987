//! 审批页 HTML 渲染
//!
//! 复选框和按钮都是表单提交，由控制台路由转成对应的命令。

use super::table::{BillTable, TableRow};
use crate::models::BulkAction;
use crate::service::MasterState;

pub fn render_approval_page(table: &BillTable, error: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Bill Approval</title>\n</head>\n<body>\n",
    );
    html.push_str("<h1>Bill Approval</h1>\n");

    if let Some(message) = error {
        html.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape(message)
        ));
    }

    html.push_str("<table>\n");
    for row in &table.rows {
        render_row(&mut html, row);
    }
    html.push_str("</table>\n");

    html.push_str("<div class=\"actions\">\n");
    for (action, path) in [
        (BulkAction::Approve, "/approval/approve"),
        (BulkAction::Reject, "/approval/reject"),
    ] {
        html.push_str(&format!(
            "<form method=\"post\" action=\"{}\"><button type=\"submit\"{}>{}</button></form>\n",
            path,
            if table.actions_enabled { "" } else { " disabled" },
            action.label()
        ));
    }
    html.push_str(
        "<form method=\"post\" action=\"/approval/refresh\"><button type=\"submit\">Refresh</button></form>\n",
    );
    html.push_str("<a href=\"/approval/export.csv\">Export CSV</a>\n</div>\n");

    // indeterminate 只能通过脚本设置
    html.push_str(
        "<script>document.querySelectorAll('input[data-indeterminate]').forEach(function (el) { el.indeterminate = true; });</script>\n",
    );
    html.push_str("</body>\n</html>\n");
    html
}

fn render_row(html: &mut String, row: &TableRow) {
    match row {
        TableRow::ColumnGroups { groups } => {
            html.push_str("<tr>");
            for group in groups {
                html.push_str(&format!(
                    "<th colspan=\"{}\">{}</th>",
                    group.span,
                    escape(group.title)
                ));
            }
            html.push_str("</tr>\n");
        }
        TableRow::ColumnLabels { master, labels } => {
            html.push_str("<tr>");
            html.push_str(&format!(
                "<th>{}</th>",
                checkbox("/approval/toggle-all", "Select all", *master)
            ));
            for label in labels.iter().skip(1) {
                html.push_str(&format!("<th>{}</th>", escape(label)));
            }
            html.push_str("</tr>\n");
        }
        TableRow::Bill(bill) => {
            let state = if bill.checked {
                MasterState::Checked
            } else {
                MasterState::Unchecked
            };
            html.push_str(&format!("<tr data-bill-id=\"{}\">", bill.id));
            html.push_str(&format!(
                "<td>{}</td>",
                checkbox(
                    &format!("/approval/toggle/{}", bill.id),
                    &format!("Select bill {}", bill.id),
                    state
                )
            ));
            for cell in &bill.cells {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
            html.push_str("</tr>\n");
        }
    }
}

fn checkbox(action: &str, label: &str, state: MasterState) -> String {
    let flag = match state {
        MasterState::Checked => " checked",
        MasterState::Unchecked => "",
        MasterState::Indeterminate => " data-indeterminate",
    };
    format!(
        "<form method=\"post\" action=\"{}\"><input type=\"checkbox\" aria-label=\"{}\" onchange=\"this.form.submit()\"{}></form>",
        action,
        escape(label),
        flag
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
