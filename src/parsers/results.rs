//! # 结果表 CSV 解析器
//!
//! 读取/写出模拟产生的 `ising_results.csv`。
//!
//! ## 格式说明
//! ```text
//! Beta,Average Energy,Average Magnetization
//! 0.1,-0.198,0.0123
//! 0.2,-0.412,0.0087
//! ...
//! ```
//! 列顺序无关，多余列忽略。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/results.rs`

use crate::error::{IsingVizError, Result};
use crate::models::{ResultRecord, ResultsTable};

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// 结果表必须包含的列
pub const REQUIRED_COLUMNS: [&str; 3] = ["Beta", "Average Energy", "Average Magnetization"];

/// 读取结果文件
pub fn load_results_file(path: &Path) -> Result<ResultsTable> {
    if !path.exists() {
        return Err(IsingVizError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| IsingVizError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_results_reader(file, &path.display().to_string())
}

/// 从任意 reader 解析结果表
pub fn parse_results_reader<R: Read>(reader: R, source: &str) -> Result<ResultsTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IsingVizError::MissingColumn {
                path: source.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for row in rdr.deserialize::<ResultRecord>() {
        records.push(row.map_err(|e| row_error(e, source))?);
    }

    Ok(ResultsTable::new(records))
}

/// 写出结果文件（即使表为空也写表头）
pub fn write_results_file(path: &Path, table: &ResultsTable) -> Result<()> {
    let file = File::create(path).map_err(|e| IsingVizError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    write_results(file, table, &path.display().to_string())
}

/// 将结果表写入任意 writer
pub fn write_results<W: Write>(writer: W, table: &ResultsTable, target: &str) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REQUIRED_COLUMNS)?;
    for record in &table.records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| IsingVizError::FileWriteError {
        path: target.to_string(),
        source: e,
    })?;

    Ok(())
}

/// 数据行反序列化失败时给出行号
fn row_error(e: csv::Error, source: &str) -> IsingVizError {
    if let csv::ErrorKind::Deserialize { pos, err } = e.kind() {
        let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
        return IsingVizError::ParseError {
            format: "results CSV".to_string(),
            path: source.to_string(),
            reason: format!("line {}: {}", line, err),
        };
    }
    IsingVizError::CsvError(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_basic() {
        let content = "Beta,Average Energy,Average Magnetization\n0.1,-1.0,0.9\n0.5,-1.8,0.3\n";
        let table = parse_results_reader(content.as_bytes(), "test").unwrap();
        assert_eq!(
            table.records,
            vec![
                ResultRecord::new(0.1, -1.0, 0.9),
                ResultRecord::new(0.5, -1.8, 0.3),
            ]
        );
    }

    #[test]
    fn test_parse_results_column_order_and_extras() {
        let content = "Average Magnetization, Steps ,Beta,Average Energy\n0.9,100,0.1,-1.0\n";
        let table = parse_results_reader(content.as_bytes(), "test").unwrap();
        assert_eq!(table.records, vec![ResultRecord::new(0.1, -1.0, 0.9)]);
    }

    #[test]
    fn test_parse_results_missing_column() {
        let content = "Beta,Average Energy\n0.1,-1.0\n";
        let err = parse_results_reader(content.as_bytes(), "test").unwrap_err();
        match err {
            IsingVizError::MissingColumn { column, .. } => {
                assert_eq!(column, "Average Magnetization")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_results_non_numeric() {
        let content = "Beta,Average Energy,Average Magnetization\n0.1,-1.0,0.9\n0.2,oops,0.4\n";
        let err = parse_results_reader(content.as_bytes(), "test").unwrap_err();
        match err {
            IsingVizError::ParseError { reason, .. } => assert!(reason.starts_with("line 3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let content = "Beta,Average Energy,Average Magnetization\n";
        let table = parse_results_reader(content.as_bytes(), "test").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_results_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IsingVizError::FileNotFound { .. }));
    }

    #[test]
    fn test_written_results_load_back() {
        let table = ResultsTable::new(vec![
            ResultRecord::new(0.1, -0.25, 0.0625),
            ResultRecord::new(1.5, -1.996, 0.999),
        ]);
        let mut buf = Vec::new();
        write_results(&mut buf, &table, "buffer").unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Beta,Average Energy,Average Magnetization\n"));

        let parsed = parse_results_reader(text.as_bytes(), "buffer").unwrap();
        assert_eq!(parsed, table);
    }
}
