use std::fs;

use tempfile::TempDir;

use crate::plotting::chart::{render_chart, render_chart_async};
use crate::types::{AggregationResult, Series};

fn sample_result() -> AggregationResult {
    AggregationResult {
        labels: vec!["10:00".to_string(), "11:00".to_string(), "12:00".to_string()],
        series: vec![
            Series {
                label: "PageView".to_string(),
                counts: vec![4, 9, 2],
            },
            Series {
                label: "AddToCart".to_string(),
                counts: vec![1, 0, 3],
            },
        ],
    }
}

#[test]
fn test_render_chart_writes_png() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chart.png");

    render_chart(&sample_result(), &path).unwrap();

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_render_empty_result() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.png");

    let empty = AggregationResult {
        labels: Vec::new(),
        series: Vec::new(),
    };

    // Should handle empty data gracefully
    assert!(render_chart(&empty, &path).is_ok());
}

#[test]
fn test_render_all_zero_counts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("zeros.png");

    let result = AggregationResult {
        labels: vec!["10:00".to_string(), "11:00".to_string()],
        series: vec![Series {
            label: "PageView".to_string(),
            counts: vec![0, 0],
        }],
    };

    assert!(render_chart(&result, &path).is_ok());
}

#[tokio::test]
async fn test_render_chart_async() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("async.png");

    render_chart_async(sample_result(), path.clone()).await.unwrap();

    assert!(fs::metadata(&path).unwrap().len() > 0);
}
