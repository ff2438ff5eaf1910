#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use clap::Parser;
use oilprice_core::error::ErrorKind;
use oilprice_exporter::config::{parse_duration, Args, ExporterSettings, SeriesPreset};

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["oilprice-exporter"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).expect("flags parse")
}

#[test]
fn defaults() {
    let a = args(&["--scrape-url", "https://example.com/oil"]);
    assert_eq!(a.port, 8000);
    assert_eq!(a.scrape_interval, Duration::from_secs(3600));
    assert_eq!(a.metrics_path, "/metrics");
    assert_eq!(a.fetch_timeout, Duration::from_secs(30));
    assert_eq!(a.series, SeriesPreset::Split);
    assert!(a.config.is_none());

    let s = ExporterSettings::from_args(a).unwrap();
    assert_eq!(s.listen.port(), 8000);
    assert_eq!(s.fetch_timeout, Some(Duration::from_secs(30)));
    let metrics: Vec<_> = s.series.iter().map(|s| s.metric.as_str()).collect();
    assert_eq!(metrics, ["oil_lowest_price_cash", "oil_lowest_price_credit"]);
}

#[test]
fn missing_scrape_url_is_rejected_by_parser() {
    let err = Args::try_parse_from(["oilprice-exporter", "--port", "9100"]).expect_err("must fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn empty_scrape_url_is_fatal() {
    let err = ExporterSettings::from_args(args(&["--scrape-url", ""])).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("--scrape-url"));

    let err = ExporterSettings::from_args(args(&["--scrape-url", "   "])).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn non_http_scrape_url_is_fatal() {
    let err = ExporterSettings::from_args(args(&["--scrape-url", "ftp://example.com/oil"]))
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn metrics_path_must_be_absolute() {
    let err = ExporterSettings::from_args(args(&[
        "--scrape-url",
        "https://example.com/oil",
        "--metrics-path",
        "metrics",
    ]))
    .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn route_syntax_in_metrics_path_is_rejected() {
    for path in ["/metrics/*", "/metrics/*rest", "/:name", "/oil/:id/metrics", "/{metrics}", "/metrics?x=1"] {
        let err = ExporterSettings::from_args(args(&[
            "--scrape-url",
            "https://example.com/oil",
            "--metrics-path",
            path,
        ]))
        .expect_err(path);
        assert_eq!(err.kind(), ErrorKind::Config, "{path}");
    }

    let ok = ExporterSettings::from_args(args(&[
        "--scrape-url",
        "https://example.com/oil",
        "--metrics-path",
        "/oil-price/metrics",
    ]))
    .unwrap();
    assert_eq!(ok.metrics_path, "/oil-price/metrics");
}

#[test]
fn zero_interval_is_rejected_and_zero_timeout_disables() {
    let err = ExporterSettings::from_args(args(&[
        "--scrape-url",
        "https://example.com/oil",
        "--scrape-interval",
        "0s",
    ]))
    .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);

    let s = ExporterSettings::from_args(args(&[
        "--scrape-url",
        "https://example.com/oil",
        "--fetch-timeout",
        "0s",
    ]))
    .unwrap();
    assert_eq!(s.fetch_timeout, None);
}

#[test]
fn single_preset() {
    let s = ExporterSettings::from_args(args(&[
        "--scrape-url",
        "https://example.com/oil",
        "--series",
        "single",
    ]))
    .unwrap();
    assert_eq!(s.series.len(), 1);
    assert_eq!(s.series[0].metric, "oil_lowest_price");
}

#[test]
fn config_file_overrides_preset() {
    let path = std::env::temp_dir().join(format!("oilprice-series-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "version: 1\nseries:\n  - name: kerosene\n    locator: \"table.kerosene td\"\n    metric: kerosene_lowest_price\n",
    )
    .unwrap();

    let s = ExporterSettings::from_args(args(&[
        "--scrape-url",
        "https://example.com/oil",
        "--series",
        "single",
        "--config",
        path.to_str().unwrap(),
    ]))
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(s.series.len(), 1);
    assert_eq!(s.series[0].name, "kerosene");
}

#[test]
fn durations() {
    assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
    assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
    assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
    assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
    assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    assert_eq!(parse_duration("1500us").unwrap(), Duration::from_micros(1500));
    assert_eq!(parse_duration("1500\u{3bc}s").unwrap(), Duration::from_micros(1500));
    assert_eq!(parse_duration("1500\u{b5}s").unwrap(), Duration::from_micros(1500));

    assert!(parse_duration("").is_err());
    assert!(parse_duration("10").is_err());
    assert!(parse_duration("5d").is_err());
    assert!(parse_duration("h").is_err());
    assert!(parse_duration("1.2.3s").is_err());
    assert!(parse_duration("1h30").is_err());
}
