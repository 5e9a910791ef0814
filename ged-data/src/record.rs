use crate::error::{Result, SchemaError};
use crate::mode::Mode;
use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};
use serde::Serialize;
use std::io::Read;

pub const COUNTRY_COLUMN: &str = "Country";
pub const CONTINENT_COLUMN: &str = "Continent";
pub const YEAR_COLUMN: &str = "Year";

/// Cell contents that mean "no figure", compared case-insensitively.
const MISSING_TOKENS: [&str; 6] = ["", "nan", "na", "n/a", "null", "none"];

/// One row of the input table: electricity production of a country
/// for a single year, split by source. Figures are in TWh.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: i32,
    pub fossil: f64,
    pub nuclear: f64,
    pub renewables: f64,
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    country: usize,
    continent: usize,
    year: usize,
    modes: [usize; 3],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| SchemaError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let country = find(COUNTRY_COLUMN)?;
        let continent = find(CONTINENT_COLUMN)?;
        let year = find(YEAR_COLUMN)?;
        // Source columns are matched through their normalized mode label.
        let mut found: [Option<usize>; 3] = [None; 3];
        for (position, header) in headers.iter().enumerate() {
            if let Ok(mode) = Mode::from_column(header) {
                found[mode.index()].get_or_insert(position);
            }
        }
        let mut modes = [0usize; 3];
        for (slot, mode) in modes.iter_mut().zip(Mode::ALL) {
            *slot = found[mode.index()].ok_or_else(|| SchemaError::MissingColumn {
                column: mode.column().to_string(),
            })?;
        }
        Ok(Self {
            country,
            continent,
            year,
            modes,
        })
    }
}

impl Record {
    /// Electricity produced from `mode`.
    pub fn electricity(&self, mode: Mode) -> f64 {
        match mode {
            Mode::FossilFuels => self.fossil,
            Mode::Nuclear => self.nuclear,
            Mode::Renewables => self.renewables,
        }
    }

    /// Parse a CSV string of electricity data into a vector of Records.
    ///
    /// Required columns: Country, Continent, Year and the three
    /// `Electricity from <Mode> (TWh)` columns. Other columns are ignored.
    pub fn parse_energy_csv(csv_object: &str) -> Result<Vec<Record>> {
        Record::parse_energy_reader(csv_object.as_bytes())
    }

    /// Same as [`parse_energy_csv`](Self::parse_energy_csv) over any reader.
    pub fn parse_energy_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(reader);
        let index = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut record_list: Vec<Record> = Vec::new();
        let mut blank_cells = 0u32;
        for row in rdr.records() {
            let rho = row?;
            let line = rho.position().map(|p| p.line()).unwrap_or_default();
            let year = parse_year(&rho, index.year, line)?;
            let mut figures = [0f64; 3];
            for ((figure, column), mode) in figures.iter_mut().zip(index.modes).zip(Mode::ALL) {
                match parse_twh(&rho, column, mode, line)? {
                    Some(value) => *figure = value,
                    None => blank_cells += 1,
                }
            }
            record_list.push(Record {
                country: cell(&rho, index.country).to_string(),
                continent: cell(&rho, index.continent).to_string(),
                year,
                fossil: figures[0],
                nuclear: figures[1],
                renewables: figures[2],
            });
        }
        if blank_cells > 0 {
            warn!("{} missing electricity cells read as 0 TWh", blank_cells);
        }
        info!("Loaded {} electricity records", record_list.len());
        Ok(record_list)
    }
}

fn cell(record: &StringRecord, column: usize) -> &str {
    record.get(column).unwrap_or("").trim()
}

fn parse_year(record: &StringRecord, column: usize, line: u64) -> Result<i32> {
    let raw = cell(record, column);
    raw.parse::<i32>().map_err(|_| SchemaError::InvalidValue {
        column: YEAR_COLUMN.to_string(),
        line,
        value: raw.to_string(),
    })
}

/// Missing figures (blank or a NaN-style token) come back as `None`.
/// Anything else must be a finite number.
fn parse_twh(record: &StringRecord, column: usize, mode: Mode, line: u64) -> Result<Option<f64>> {
    let raw = cell(record, column);
    let lowered = raw.to_lowercase();
    if MISSING_TOKENS.contains(&lowered.as_str()) {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(SchemaError::InvalidValue {
            column: mode.column().to_string(),
            line,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::SchemaError;
    use crate::mode::Mode;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/global-electricity-sample.csv");

    #[test]
    fn test_parse_sample_fixture() {
        let records = Record::parse_energy_csv(SAMPLE_CSV).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].country, "France");
        assert_eq!(records[0].continent, "Europe");
        assert_eq!(records[0].year, 2000);
        assert_eq!(records[0].electricity(Mode::Nuclear), 400.0);
        assert_eq!(records[4].country, "Kenya");
        assert_eq!(records[4].fossil, 1.25);
    }

    #[test]
    fn test_blank_cell_reads_as_zero() {
        let records = Record::parse_energy_csv(SAMPLE_CSV).unwrap();
        let germany_2001 = records
            .iter()
            .find(|r| r.country == "Germany" && r.year == 2001)
            .unwrap();
        assert_eq!(germany_2001.renewables, 0.0);
        assert_eq!(germany_2001.fossil, 360.5);
    }

    #[test]
    fn test_column_order_is_free() {
        let csv_data = "\
Electricity from Renewables (TWh),Year,Electricity from Nuclear (TWh),Country,Electricity from Fossil Fuels (TWh),Continent
5,2010,5,X,10,Nowhere
";
        let records = Record::parse_energy_csv(csv_data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "X");
        assert_eq!(records[0].fossil, 10.0);
        assert_eq!(records[0].nuclear, 5.0);
        assert_eq!(records[0].renewables, 5.0);
    }

    #[test]
    fn test_missing_column_names_the_column() {
        let csv_data = "\
Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Renewables (TWh)
X,Nowhere,2010,10,5
";
        match Record::parse_energy_csv(csv_data).unwrap_err() {
            SchemaError::MissingColumn { column } => {
                assert_eq!(column, "Electricity from Nuclear (TWh)")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparsable_value_is_rejected() {
        let csv_data = "\
Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Nuclear (TWh),Electricity from Renewables (TWh)
X,Nowhere,2010,lots,5,5
";
        match Record::parse_energy_csv(csv_data).unwrap_err() {
            SchemaError::InvalidValue { column, line, value } => {
                assert_eq!(column, "Electricity from Fossil Fuels (TWh)");
                assert_eq!(line, 2);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparsable_year_is_rejected() {
        let csv_data = "\
Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Nuclear (TWh),Electricity from Renewables (TWh)
X,Nowhere,twenty-ten,10,5,5
";
        let err = Record::parse_energy_csv(csv_data).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidValue { ref column, .. } if column == "Year"));
    }

    #[test]
    fn test_parse_header_only() {
        let csv_data = "Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Nuclear (TWh),Electricity from Renewables (TWh)\n";
        let records = Record::parse_energy_csv(csv_data).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_nan_tokens_read_as_missing() {
        let csv_data = "\
Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Nuclear (TWh),Electricity from Renewables (TWh)
X,Nowhere,2010,10,5,5
Y,Nowhere,2010,NaN,1,nan
Z,Nowhere,2010,N/A,2,NA
";
        let records = Record::parse_energy_csv(csv_data).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].fossil, 0.0);
        assert_eq!(records[1].nuclear, 1.0);
        assert_eq!(records[1].renewables, 0.0);
        assert_eq!(records[2].fossil, 0.0);
        assert_eq!(records[2].renewables, 0.0);
        assert!(records
            .iter()
            .all(|r| Mode::ALL.iter().all(|&m| r.electricity(m).is_finite())));
    }

    #[test]
    fn test_infinite_value_is_rejected() {
        for token in ["inf", "-inf", "infinity"] {
            let csv_data = format!(
                "Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Nuclear (TWh),Electricity from Renewables (TWh)\nX,Nowhere,2010,10,{},5\n",
                token
            );
            match Record::parse_energy_csv(&csv_data).unwrap_err() {
                SchemaError::InvalidValue { column, line, value } => {
                    assert_eq!(column, "Electricity from Nuclear (TWh)");
                    assert_eq!(line, 2);
                    assert_eq!(value, token);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
