use bikeshare_analytics::AnalyticsError;
use bikeshare_analytics::filter;
use bikeshare_analytics::ingestion::csv::ingest_trips_from_reader;
use bikeshare_analytics::stats::{
    ColumnStat, duration_stats, station_stats, time_stats, user_stats,
};
use bikeshare_analytics::types::{City, Dataset, DayFilter, FilterSpec, MonthFilter, OptionalColumn};

fn ingest(input: &str, city: City) -> Dataset {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    ingest_trips_from_reader(&mut rdr, city).unwrap()
}

fn chicago_like() -> Dataset {
    ingest(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n\
         2017-03-06 08:00:00,2017-03-06 08:02:10,130,Clark & Lake,Canal & Adams,Subscriber,Male,1989.0\n\
         2017-03-06 08:30:00,2017-03-06 08:31:30,90,Clark & Lake,Canal & Adams,Customer,Female,1992.0\n\
         2017-03-07 17:00:00,2017-03-07 17:01:05,65,Canal & Adams,Clark & Lake,Subscriber,Male,1989.0\n",
        City::Chicago,
    )
}

fn washington_like() -> Dataset {
    ingest(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-02 09:30:00.0,2017-01-02 09:45:00.0,900.0,Jefferson Dr,Maine Ave,Registered\n\
         2017-01-02 10:00:00.0,2017-01-02 10:05:00.0,300.0,Maine Ave,Jefferson Dr,Casual\n",
        City::Washington,
    )
}

#[test]
fn time_stats_over_ingested_records() {
    let stats = time_stats(&chicago_like()).unwrap();
    assert_eq!(stats.month, "March");
    assert_eq!(stats.day_of_week, "Monday");
    assert_eq!(stats.hour, 8);
}

#[test]
fn station_stats_over_ingested_records() {
    let stats = station_stats(&chicago_like()).unwrap();
    assert_eq!(stats.start_station, "Clark & Lake");
    assert_eq!(stats.end_station, "Canal & Adams");
    assert_eq!(stats.trip, "Clark & Lake to Canal & Adams");
}

#[test]
fn duration_stats_worked_example() {
    // Durations 130 + 90 + 65 = 285s total, mean 95s.
    let stats = duration_stats(&chicago_like()).unwrap();
    assert_eq!(stats.total.to_string(), "0h 4m 45s");
    assert_eq!(stats.mean.to_string(), "0h 1m 35s");
}

#[test]
fn user_stats_with_full_schema() {
    let stats = user_stats(&chicago_like()).unwrap();
    assert_eq!(
        stats.user_types,
        vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
    );
    assert_eq!(
        stats.genders.value(),
        Some(&vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
    );
    let years = stats.birth_years.value().unwrap();
    assert_eq!(years.earliest, 1989);
    assert_eq!(years.most_recent, 1992);
    assert_eq!(years.most_common, 1989);
}

#[test]
fn user_stats_reports_missing_columns_structurally() {
    // A fully populated dataset whose schema has no Gender/Birth Year must
    // report unavailability, never a parse or computation error.
    let stats = user_stats(&washington_like()).unwrap();
    assert_eq!(
        stats.genders,
        ColumnStat::Unavailable {
            column: OptionalColumn::Gender
        }
    );
    assert_eq!(
        stats.birth_years,
        ColumnStat::Unavailable {
            column: OptionalColumn::BirthYear
        }
    );
    assert_eq!(OptionalColumn::BirthYear.name(), "birth_year");
}

#[test]
fn every_analyzer_rejects_an_empty_dataset() {
    // Filtering to zero records is valid; the analyzers are where emptiness
    // surfaces, each independently.
    let empty = filter::apply(
        &washington_like(),
        &FilterSpec::new(MonthFilter::June, DayFilter::All),
    );
    assert!(empty.is_empty());

    assert!(matches!(time_stats(&empty), Err(AnalyticsError::EmptyDataset)));
    assert!(matches!(station_stats(&empty), Err(AnalyticsError::EmptyDataset)));
    assert!(matches!(duration_stats(&empty), Err(AnalyticsError::EmptyDataset)));
    assert!(matches!(user_stats(&empty), Err(AnalyticsError::EmptyDataset)));
}

#[test]
fn serialized_user_stats_distinguish_availability() {
    let stats = user_stats(&washington_like()).unwrap();
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["genders"]["status"], "unavailable");
    assert_eq!(json["genders"]["column"], "gender");
    assert_eq!(json["birth_years"]["column"], "birth_year");
    assert_eq!(json["user_types"][0][0], "Registered");

    let stats = user_stats(&chicago_like()).unwrap();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["genders"]["status"], "available");
    assert_eq!(json["birth_years"]["value"]["most_common"], 1989);
}
