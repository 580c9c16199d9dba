#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use surfs_up::core::{Measurement, Station};
use surfs_up::SqliteStore;
use tempfile::TempDir;

const SCHEMA: &[&str] = &[
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
];

/// Same tables, but `prcp`/`tobs` have NUMERIC affinity, so whole-number
/// readings are stored as INTEGER.
pub const NUMERIC_SCHEMA: &[&str] = &[
    SCHEMA[0],
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp NUMERIC,
        tobs NUMERIC
    )",
];

/// A SQLite file on disk, seeded once and then opened read-only. The
/// directory is removed when the fixture is dropped.
pub struct Fixture {
    pub dir: TempDir,
    pub path: String,
}

impl Fixture {
    pub async fn seed(stations: &[Station], measurements: &[Measurement]) -> Fixture {
        Self::seed_with_schema(SCHEMA, stations, measurements).await
    }

    pub async fn seed_with_schema(
        schema: &[&str],
        stations: &[Station],
        measurements: &[Measurement],
    ) -> Fixture {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hawaii.sqlite").to_str().unwrap().to_string();

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        for statement in schema {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }

        for s in stations {
            sqlx::query(
                "INSERT INTO station (station, name, latitude, longitude, elevation) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&s.station)
            .bind(&s.name)
            .bind(s.latitude)
            .bind(s.longitude)
            .bind(s.elevation)
            .execute(&pool)
            .await
            .unwrap();
        }

        for m in measurements {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(&m.station)
                .bind(&m.date)
                .bind(m.prcp)
                .bind(m.tobs)
                .execute(&pool)
                .await
                .unwrap();
        }

        pool.close().await;
        Fixture { dir, path }
    }

    pub async fn store(&self) -> SqliteStore {
        SqliteStore::connect(&self.path, 2).await.unwrap()
    }
}

pub fn station(code: &str, name: &str) -> Station {
    Station {
        station: code.to_string(),
        name: name.to_string(),
        latitude: 21.2716,
        longitude: -157.8168,
        elevation: 3.0,
    }
}

pub fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}

pub fn hawaii_stations() -> Vec<Station> {
    vec![
        station("USC00519281", "WAIHEE 837.5, HI US"),
        station("USC00513117", "KANEOHE 838.1, HI US"),
    ]
}

/// One measurement per day from 2016-08-01 through 2017-08-23 at the
/// tobs station, with every fifth day missing its precipitation value.
pub fn daily_measurements() -> Vec<Measurement> {
    let start = chrono::NaiveDate::from_ymd_opt(2016, 8, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .enumerate()
        .map(|(i, d)| {
            let prcp = if i % 5 == 0 { None } else { Some((i % 7) as f64 * 0.1) };
            measurement(
                "USC00519281",
                &d.format("%Y-%m-%d").to_string(),
                prcp,
                60.0 + (i % 20) as f64,
            )
        })
        .collect()
}
