use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use stabrs_core::models::SpanSet;
use stabrs_core::utils::get_dynamic_reader_w_stdin;
use stabrs_index::MultiTrackStabber;
use stabrs_index::multi_track_stabber::IntoMultiTrackStabber;

enum OutputFormat {
    Text,
    Json,
}

/// One answered query, as emitted in JSON mode. `hits` holds the global
/// ordinals of the covering records in the interval file.
#[derive(Serialize)]
struct StabRecord<'a> {
    track: &'a str,
    point: i64,
    hits: Vec<usize>,
}

pub fn run_stab(matches: &ArgMatches) -> Result<()> {
    let intervals_file = matches
        .get_one::<String>("intervals")
        .expect("A path to an interval file is required.");

    let queries_file = matches
        .get_one::<String>("queries")
        .expect("A path to a query file is required.");

    let default_format = "text".to_string();
    let format_str = matches
        .get_one::<String>("format")
        .unwrap_or(&default_format);

    let format = match format_str.as_str() {
        "text" => OutputFormat::Text,
        "json" => OutputFormat::Json,
        _ => {
            return Err(anyhow::anyhow!(
                "Invalid output format: {}. Valid options are 'text' or 'json'",
                format_str
            ));
        }
    };

    // Build one stabbing index per track directly from the interval file
    let span_set = SpanSet::try_from(Path::new(intervals_file))?;
    let index: MultiTrackStabber<i64, usize> = span_set.into_multi_track_stabber()?;

    // Process queries with buffered output
    process_queries(queries_file, &index, format)?;

    Ok(())
}

fn process_queries(
    queries_file: &str,
    index: &MultiTrackStabber<i64, usize>,
    format: OutputFormat,
) -> Result<()> {
    let reader = get_dynamic_reader_w_stdin(queries_file)?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (track, point) = parse_query_line(&line)?;
        // payloads are the records' global ordinals in the interval file
        let hits: Vec<usize> = index.stab_iter(track, point).map(|iv| iv.val).collect();

        match format {
            OutputFormat::Text => {
                writeln!(writer, "{}", format_text_line(track, point, &hits))?;
            }
            OutputFormat::Json => {
                let record = StabRecord { track, point, hits };
                serde_json::to_writer(&mut writer, &record)?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn parse_query_line(line: &str) -> Result<(&str, i64)> {
    let mut fields = line.split('\t');

    let track = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing track field"))?;
    let point = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing point field in query line: {}", line))?
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Error in parsing query point: {}", line))?;

    Ok((track, point))
}

fn format_text_line(track: &str, point: i64, hits: &[usize]) -> String {
    let ids = hits
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}\t{}\t{}", track, point, ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_parse_query_line() {
        let (track, point) = parse_query_line("cpu\t-42").unwrap();
        assert_eq!(track, "cpu");
        assert_eq!(point, -42);
    }

    #[rstest]
    fn test_parse_query_line_rejects_garbage() {
        assert!(parse_query_line("cpu").is_err());
        assert!(parse_query_line("cpu\tseven").is_err());
    }

    #[rstest]
    fn test_format_text_line() {
        assert_eq!(format_text_line("cpu", 7, &[0, 2, 5]), "cpu\t7\t0,2,5");
        assert_eq!(format_text_line("cpu", 7, &[]), "cpu\t7\t");
    }

    #[rstest]
    fn test_queries_resolve_to_file_ordinals() {
        let span_set = SpanSet::try_from(
            "cpu\t0\t100\nmem\t0\t40\ncpu\t50\t150\n".as_bytes(),
        )
        .unwrap();
        let index: MultiTrackStabber<i64, usize> = span_set.into_multi_track_stabber().unwrap();

        let hits: Vec<usize> = index.stab_iter("cpu", 75).map(|iv| iv.val).collect();
        assert_eq!(hits, vec![0, 2]);
    }
}
