use indexmap::IndexSet;
use serde::Serialize;

/// 全选复选框的三态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// 选择集管理 (纯状态，无 I/O)
///
/// `selected` 始终是 `known` (当前已加载账单的 ID) 的子集。
#[derive(Debug, Clone, Default)]
pub struct Selection {
    known: IndexSet<i64>,
    selected: IndexSet<i64>,
}

impl Selection {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            known: ids.into_iter().collect(),
            selected: IndexSet::new(),
        }
    }

    /// 账单列表整体替换后调用: 清空选择并换成新的 ID 集合
    pub fn reset(&mut self, ids: impl IntoIterator<Item = i64>) {
        *self = Self::new(ids);
    }

    /// 切换单行；未知 ID 不做处理，返回 false
    pub fn toggle_row(&mut self, id: i64) -> bool {
        if !self.known.contains(&id) {
            return false;
        }
        if !self.selected.shift_remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// 全选开关: 已选中或部分选中时清空，未选中时全选
    pub fn toggle_all(&mut self) -> MasterState {
        match self.master_state() {
            MasterState::Checked | MasterState::Indeterminate => self.selected.clear(),
            MasterState::Unchecked => self.selected = self.known.clone(),
        }
        self.master_state()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn master_state(&self) -> MasterState {
        if self.selected.is_empty() {
            MasterState::Unchecked
        } else if self.selected.len() == self.known.len() {
            MasterState::Checked
        } else {
            MasterState::Indeterminate
        }
    }

    /// 选择集快照，按表格行顺序
    pub fn snapshot(&self) -> Vec<i64> {
        self.known
            .iter()
            .copied()
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
