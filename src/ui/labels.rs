//! Static UI labels per supported language.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Bahasa Indonesia
    #[default]
    Id,
    /// 中文
    Cn,
}

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Id => &ID,
            Language::Cn => &CN,
        }
    }
}

/// Every visible text of the tool. Each language provides all of them.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub id: &'static str,
    pub model: &'static str,
    pub total: &'static str,
    pub color: &'static str,
    pub time: &'static str,
    pub add: &'static str,
    pub grand_total: &'static str,
    pub chart_title: &'static str,
    pub date: &'static str,
    pub shift: &'static str,
    pub day: &'static str,
    pub night: &'static str,
    pub action: &'static str,
    pub delete: &'static str,
    pub filter: &'static str,
    pub reset: &'static str,
    pub export: &'static str,
    pub period: &'static str,
    pub all_data: &'static str,
    pub no_data: &'static str,
}

impl Labels {
    pub fn shift_name(&self, shift: crate::models::Shift) -> &'static str {
        match shift {
            crate::models::Shift::Day => self.day,
            crate::models::Shift::Night => self.night,
        }
    }

    /// Column headers in export order: date, time, model, color, shift, total.
    pub fn export_headers(&self) -> [&'static str; 6] {
        [self.date, self.time, self.model, self.color, self.shift, self.total]
    }
}

static ID: Labels = Labels {
    title: "Sistem Data Produksi",
    id: "ID",
    model: "Model Tas",
    total: "TOTAL",
    color: "Warna",
    time: "Jam",
    add: "Tambah Data",
    grand_total: "Grand TOTAL",
    chart_title: "Grafik Produksi Per Hari",
    date: "Tanggal",
    shift: "Shift",
    day: "Siang",
    night: "Malam",
    action: "Aksi",
    delete: "Hapus",
    filter: "Filter Tanggal",
    reset: "Reset",
    export: "Export Excel",
    period: "Periode:",
    all_data: "Semua Data (Tanpa Filter)",
    no_data: "Tidak ada data sesuai filter tanggal",
};

static CN: Labels = Labels {
    title: "生产数据系统",
    id: "编号",
    model: "包款型号",
    total: "TOTAL",
    color: "颜色",
    time: "时间",
    add: "添加数据",
    grand_total: "总TOTAL",
    chart_title: "每日生产图表",
    date: "日期",
    shift: "班次",
    day: "白班",
    night: "夜班",
    action: "操作",
    delete: "删除",
    filter: "筛选日期",
    reset: "重置",
    export: "导出Excel",
    period: "期间:",
    all_data: "全部数据（无筛选）",
    no_data: "没有符合筛选日期的数据",
};
