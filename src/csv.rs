// src/csv.rs
//
// PlayerRecord ↔ flat table rows. Writing and reading both go through the
// `csv` crate; this module only decides the column shape.

use std::collections::BTreeSet;
use std::io::{Read, Write};

use crate::error::SinkError;
use crate::labels::column_title;
use crate::model::PlayerRecord;

/// Fixed leading columns, before any field codes.
pub const BASE_HEADERS: &[&str] = &["Player", "Position", "League", "Contract Start", "Contract End"];
pub const SEASON_HEADERS: &[&str] = &["Season", "Version"];

/// Column layout for a batch: base columns, season columns if any record is
/// tagged, then the union of field codes (sorted).
pub struct Columns {
    pub with_season: bool,
    pub codes: Vec<String>,
}

impl Columns {
    pub fn for_records(records: &[PlayerRecord]) -> Self {
        let codes: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.fields.keys().map(String::as_str))
            .collect();
        Self {
            with_season: records.iter().any(|r| r.season.is_some()),
            codes: codes.into_iter().map(String::from).collect(),
        }
    }

    pub fn headers(&self, rename: bool) -> Vec<String> {
        let mut h: Vec<String> = BASE_HEADERS.iter().map(|s| s!(*s)).collect();
        if self.with_season {
            h.extend(SEASON_HEADERS.iter().map(|s| s!(*s)));
        }
        h.extend(self.codes.iter().map(|c| column_title(c, rename)));
        h
    }

    /// One record as a row in this layout. Missing fields are empty cells.
    pub fn row(&self, r: &PlayerRecord) -> Vec<String> {
        let mut row = vec![
            r.name.clone(),
            r.positions_joined(),
            r.league_display(),
            r.contract.start.clone().unwrap_or_default(),
            r.contract.end.clone().unwrap_or_default(),
        ];
        if self.with_season {
            match &r.season {
                Some(tag) => {
                    row.push(tag.year.to_string());
                    row.push(tag.version.clone());
                }
                None => row.extend([s!(), s!()]),
            }
        }
        row.extend(
            self.codes
                .iter()
                .map(|c| r.fields.get(c).map(ToString::to_string).unwrap_or_default()),
        );
        row
    }
}

/// Write a header line plus one line per record.
pub fn write_records<W: Write>(w: W, records: &[PlayerRecord], rename: bool) -> Result<(), SinkError> {
    let cols = Columns::for_records(records);
    let mut out = ::csv::Writer::from_writer(w);
    out.write_record(cols.headers(rename))?;
    for r in records {
        out.write_record(cols.row(r))?;
    }
    out.flush()?;
    Ok(())
}

/// Header row + data rows. Short rows are padded to the header width.
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn read_table<R: Read>(r: R) -> Result<Table, SinkError> {
    let mut rdr = ::csv::ReaderBuilder::new().flexible(true).from_reader(r);
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let mut row: Vec<String> = rec?.iter().map(String::from).collect();
        if row.len() < headers.len() {
            row.resize(headers.len(), s!());
        }
        rows.push(row);
    }
    Ok(Table { headers, rows })
}

pub fn write_table<W: Write>(w: W, table: &Table) -> Result<(), SinkError> {
    let mut out = ::csv::Writer::from_writer(w);
    out.write_record(&table.headers)?;
    for row in &table.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contract, FieldMap, FieldValue, SeasonTag};

    fn rec(name: &str, fields: &[(&str, FieldValue)]) -> PlayerRecord {
        PlayerRecord {
            name: s!(name),
            positions: vec![s!("RW"), s!("ST")],
            league_name: s!("Ligue 1"),
            league_country: s!("France"),
            contract: Contract::from_text("Jul 1, 2021 ~ Jun 30, 2025"),
            fields: fields.iter().map(|(k, v)| (s!(*k), v.clone())).collect::<FieldMap>(),
            season: None,
        }
    }

    #[test]
    fn union_of_codes_and_empty_cells() {
        let recs = vec![
            rec("A", &[("oa", FieldValue::Int(91))]),
            rec("B", &[("vl", FieldValue::Float(25_000_000.0))]),
        ];
        let mut buf = Vec::new();
        write_records(&mut buf, &recs, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Player,Position,League,Contract Start,Contract End,oa,vl");
        assert_eq!(lines[1], r#"A,"RW, ST",Ligue 1 (France),"Jul 1, 2021","Jun 30, 2025",91,"#);
        assert_eq!(lines[2], r#"B,"RW, ST",Ligue 1 (France),"Jul 1, 2021","Jun 30, 2025",,25000000"#);
    }

    #[test]
    fn renamed_headers_and_season_columns() {
        let recs = vec![rec("A", &[("oa", FieldValue::Int(91))])
            .with_season(SeasonTag { year: 2022, version: s!("FIFA 23") })];
        let cols = Columns::for_records(&recs);
        assert_eq!(
            cols.headers(true),
            vec!["Player", "Position", "League", "Contract Start", "Contract End", "Season", "Version", "Overall Score"]
        );
        assert_eq!(cols.row(&recs[0])[5..], [s!("2022"), s!("FIFA 23"), s!("91")]);
    }

    #[test]
    fn read_pads_short_rows() {
        let t = read_table("a,b,c\n1,2\n".as_bytes()).unwrap();
        assert_eq!(t.headers, vec!["a", "b", "c"]);
        assert_eq!(t.rows, vec![vec!["1", "2", ""]]);
    }
}
