//! サンプルワークブック生成
//!
//! Publications / Preprints / Talks の3シートを持つひな形を作る。
//! 見出し行は青地に白の太字、列幅は内容に合わせて固定。

use crate::error::Result;
use crate::types::{columns, RowRecord};
use rust_xlsxwriter::{Color, Format, Workbook};

/// 見出し行の背景色
pub const HEADER_FILL: u32 = 0x2563EB;

/// 列定義（見出しと幅）
#[derive(Debug, Clone, Copy)]
pub struct TemplateColumn {
    pub header: &'static str,
    pub width: f64,
}

const fn column(header: &'static str, width: f64) -> TemplateColumn {
    TemplateColumn { header, width }
}

/// シート定義
#[derive(Debug, Clone)]
pub struct TemplateSheet {
    pub name: &'static str,
    pub columns: Vec<TemplateColumn>,
    pub rows: Vec<RowRecord>,
}

impl TemplateSheet {
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }
}

fn record(pairs: &[(&str, &str)]) -> RowRecord {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(column, value)| (*column, *value))
        .collect()
}

/// 出版物シート
pub fn publications_sheet() -> TemplateSheet {
    use columns::*;
    TemplateSheet {
        name: "Publications",
        columns: vec![
            column(YEAR, 8.0),
            column(VENUE, 15.0),
            column(TITLE, 80.0),
            column(LINK, 50.0),
            column(AUTHORS, 60.0),
            column(NOTE, 25.0),
            column(CODE_LINK, 40.0),
        ],
        rows: vec![
            record(&[
                (YEAR, "2025"),
                (VENUE, "ICLR"),
                (TITLE, "Pacmann: Efficient Private Approximate Nearest Neighbor Search"),
                (LINK, "https://eprint.iacr.org/2024/1600"),
                (AUTHORS, "Mingxun Zhou, Elaine Shi, and Giulia Fanti"),
            ]),
            record(&[
                (YEAR, "2024"),
                (VENUE, "S&P"),
                (TITLE, "Piano: Extremely Simple, Single-Server PIR with Sublinear Server Computation"),
                (LINK, "https://eprint.iacr.org/2023/452"),
                (AUTHORS, "Mingxun Zhou, Andrew Park, Elaine Shi and Wenting Zheng"),
            ]),
            record(&[
                (YEAR, "2024"),
                (VENUE, "Eurocrypt"),
                (TITLE, "Efficient Pre-processing PIR Without Public-Key Cryptography"),
                (LINK, "https://eprint.iacr.org/2023/1574"),
                (AUTHORS, "Ashrujit Ghoshal, Mingxun Zhou, and Elaine Shi"),
                (NOTE, "(Randomized Author Order)"),
            ]),
            record(&[
                (YEAR, "2021"),
                (VENUE, "NDSS"),
                (TITLE, "SquirRL: Automating Attack Analysis on Blockchain Incentive Mechanisms with Deep Reinforcement Learning"),
                (LINK, "https://arxiv.org/pdf/1912.01798.pdf"),
                (AUTHORS, "Charlie Hou*, Mingxun Zhou*, Yan Ji, Phil Daian, Florian Tramer, Giulia Fanti, and Ari Juels"),
                (NOTE, "(*Equal Contribution)"),
                (CODE_LINK, "https://github.com/wuwuz/SquirRL"),
            ]),
            record(&[
                (YEAR, "2020"),
                (VENUE, "VLDB"),
                (TITLE, "Vacuum Filters: More Space-Efficient and Faster Replacement for Bloom and Cuckoo Filters"),
                (LINK, "http://www.vldb.org/pvldb/vol13/p197-wang.pdf"),
                (AUTHORS, "Minmei Wang*, Mingxun Zhou*, Shouqian Shi, and Chen Qian"),
                (NOTE, "(*Equal Contribution)"),
                (CODE_LINK, "https://github.com/wuwuz/Vacuum-Filter"),
            ]),
        ],
    }
}

/// プレプリントシート
pub fn preprints_sheet() -> TemplateSheet {
    use columns::*;
    TemplateSheet {
        name: "Preprints",
        columns: vec![
            column(TITLE, 70.0),
            column(LINK, 50.0),
            column(AUTHORS, 60.0),
            column(YEAR, 8.0),
            column(NOTE, 20.0),
            column(TYPE, 20.0),
        ],
        rows: vec![
            record(&[
                (TITLE, "Private Information Retrieval and Searching with Sublinear Costs"),
                (LINK, "https://csd.cmu.edu/sites/default/files/phd-thesis/CMU-CS-25-115.pdf"),
                (YEAR, "2025"),
                (NOTE, "PhD Thesis"),
            ]),
            record(&[
                (TITLE, "The Power of the Differentially Oblivious Shuffle in Distributed Privacy Mechanisms"),
                (LINK, "https://eprint.iacr.org/2022/177.pdf"),
                (AUTHORS, "Mingxun Zhou, and Elaine Shi"),
                (YEAR, "2022"),
            ]),
            record(&[
                (TITLE, "VRecon: An Efficient Set Reconciliation Algorithm"),
                (YEAR, "2021"),
                (NOTE, "Bachelor Thesis"),
            ]),
        ],
    }
}

/// 講演シート
pub fn talks_sheet() -> TemplateSheet {
    use columns::*;
    TemplateSheet {
        name: "Talks",
        columns: vec![
            column(TITLE, 70.0),
            column(VENUE, 40.0),
            column(DATE, 15.0),
            column(VIDEO_LINK, 50.0),
        ],
        rows: vec![
            record(&[
                (TITLE, "Advanced Composition Theorems for Differential Obliviousness"),
                (VENUE, "ITCS"),
                (DATE, "Jan. 2024"),
                (VIDEO_LINK, "https://www.youtube.com/watch?v=oq1jIpUAy-0"),
            ]),
            record(&[
                (TITLE, "Recent Progress in Private Information Retrieval"),
                (VENUE, "PKU"),
                (DATE, "Jul. 2023"),
                (VIDEO_LINK, "https://www.bilibili.com/video/BV1gF411X7BF"),
            ]),
            record(&[
                (TITLE, "Piano: Extremely Simple, Single-Server PIR with Sublinear Server Computation"),
                (VENUE, "CMU Crypto Seminar"),
                (DATE, "May 2023"),
                (VIDEO_LINK, "https://www.youtube.com/watch?v=WOvk7grf2H0"),
            ]),
            record(&[
                (TITLE, "SquirRL: Automating Attack Analysis on Blockchain Incentive Mechanisms with Deep Reinforcement Learning"),
                (VENUE, "IJTCS"),
                (DATE, "Aug. 2020"),
                (VIDEO_LINK, "https://www.bilibili.com/video/av202040234/"),
            ]),
        ],
    }
}

/// 3シートのひな形
pub fn sample_sheets() -> Vec<TemplateSheet> {
    vec![publications_sheet(), preprints_sheet(), talks_sheet()]
}

/// ワークブックをバッファに生成
pub fn build_workbook(sheets: &[TemplateSheet]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL));

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;

        for (col, column) in sheet.columns.iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, column.header, &header_format)?;
            worksheet.set_column_width(col, column.width)?;
        }

        for (index, row) in sheet.rows.iter().enumerate() {
            let row_num = index as u32 + 1;
            for (col, column) in sheet.columns.iter().enumerate() {
                let value = row.get(column.header);
                if !value.is_empty() {
                    worksheet.write_string(row_num, col as u16, value)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
