//! 表形式ソース
//!
//! - CSV（csvクレート、先頭行がヘッダー）
//! - ワークブック .xlsx/.xlsm/.xls/.ods（calamine、先頭シートの先頭行がヘッダー）
//!
//! どちらも1行ずつ `Result<RawRow>` を返すイテレータとして扱う。

use crate::error::{HomeInOnError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use homeinon_common::RawRow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 行ストリーム
pub type RowStream = Box<dyn Iterator<Item = Result<RawRow>> + Send>;

/// 拡張子からソースを選んで開く
pub fn open_source(path: &Path) -> Result<RowStream> {
    if !path.exists() {
        return Err(HomeInOnError::FileNotFound(path.display().to_string()));
    }

    if is_workbook(path) {
        Ok(Box::new(WorkbookSource::open(path)?))
    } else {
        Ok(Box::new(CsvSource::open(path)?))
    }
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// ヘッダー名の整形（BOM・前後空白を除去）
fn clean_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_string()
}

/// CSVソース
pub struct CsvSource<R: Read> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl CsvSource<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> CsvSource<R> {
    /// 列数がヘッダーと合わない行もそのまま読む（不足列は空、余分な列は捨てる）。
    /// ストリームエラーになるのは I/O エラーと不正な UTF-8 だけ
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(clean_header).collect();

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(record.map_err(HomeInOnError::from).map(|record| {
            self.headers
                .iter()
                .map(String::as_str)
                .zip(record.iter())
                .collect()
        }))
    }
}

/// ワークブックソース（先頭シート）
pub struct WorkbookSource {
    headers: Vec<String>,
    rows: std::vec::IntoIter<Vec<String>>,
}

impl WorkbookSource {
    pub fn open(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| HomeInOnError::Workbook(format!("{}: {}", path.display(), e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| HomeInOnError::Workbook(format!("シートがありません: {}", path.display())))?
            .map_err(|e| HomeInOnError::Workbook(e.to_string()))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

        let headers = rows
            .next()
            .map(|header| header.iter().map(|h| clean_header(h)).collect())
            .unwrap_or_default();
        let body: Vec<Vec<String>> = rows.collect();

        Ok(Self {
            headers,
            rows: body.into_iter(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for WorkbookSource {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.rows.next()?;
        Some(Ok(self
            .headers
            .iter()
            .map(String::as_str)
            .zip(cells)
            .collect()))
    }
}

/// セル値を文字列化（整数値の浮動小数は小数点なしで出す）
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}
