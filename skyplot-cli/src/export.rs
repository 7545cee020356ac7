//! Track exports
use std::{collections::BTreeMap, fs::File, io::BufWriter, path::Path};

use csv::Writer;
use skyplot::prelude::{Track, SV};

use crate::Error;

/// Returns the file name with all dots replaced, used to name output products
pub fn file_stem(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().replace('.', "_"))
        .unwrap_or_else(|| "nav".to_string())
}

/// Writes one row per visible sample, satellites in ascending order
pub fn write_csv(tracks: &BTreeMap<SV, Track>, path: &Path) -> Result<(), Error> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["Epoch", "SV", "Azimuth [°]", "Elevation [°]"])?;
    for (sv, track) in tracks.iter() {
        let sv = sv.to_string();
        for sample in track.samples.iter() {
            w.write_record(&[
                sample.epoch.to_string(),
                sv.clone(),
                format!("{:.3}", sample.azimuth_deg),
                format!("{:.3}", sample.elevation_deg),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Dumps the tracks as a JSON object, indexed by satellite
pub fn write_json(tracks: &BTreeMap<SV, Track>, path: &Path) -> Result<(), Error> {
    let tracks = tracks
        .iter()
        .map(|(sv, track)| (sv.to_string(), track))
        .collect::<BTreeMap<_, _>>();
    let fd = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(fd, &tracks)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use skyplot::prelude::{AngleSample, Epoch};
    use std::str::FromStr;
    fn tracks() -> BTreeMap<SV, Track> {
        let t0 = Epoch::from_gregorian_utc(2022, 1, 1, 0, 0, 0, 0);
        let t1 = Epoch::from_gregorian_utc(2022, 1, 1, 0, 15, 0, 0);
        let mut tracks = BTreeMap::new();
        for (sv, az) in [("G17", 120.0), ("E05", 300.5)] {
            tracks.insert(
                SV::from_str(sv).unwrap(),
                Track {
                    ephemeris_epoch: t0,
                    samples: vec![
                        AngleSample {
                            epoch: t0,
                            azimuth_deg: az,
                            elevation_deg: 12.25,
                        },
                        AngleSample {
                            epoch: t1,
                            azimuth_deg: az + 1.0,
                            elevation_deg: 15.5,
                        },
                    ],
                },
            );
        }
        tracks
    }
    #[test]
    fn output_names() {
        assert_eq!(
            file_stem(Path::new("test_resources/NAV/V3/BRDC00TST_R_20220010000_01D_GN.rnx")),
            "BRDC00TST_R_20220010000_01D_GN_rnx"
        );
        assert_eq!(file_stem(Path::new("brdc0010.22n.gz")), "brdc0010_22n_gz");
    }
    #[test]
    fn csv_export() {
        let path = std::env::temp_dir().join("skyplot-cli-csv-export.csv");
        write_csv(&tracks(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Epoch,SV,Azimuth [°],Elevation [°]");
        assert!(lines.iter().any(|l| l.ends_with(",G17,120.000,12.250")));
        assert!(lines.iter().any(|l| l.ends_with(",E05,301.500,15.500")));
        let _ = std::fs::remove_file(&path);
    }
    #[test]
    fn json_export() {
        let path = std::env::temp_dir().join("skyplot-cli-json-export.json");
        write_json(&tracks(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let g17 = &value["G17"]["samples"];
        assert_eq!(g17.as_array().map(|s| s.len()), Some(2));
        assert_eq!(g17[1]["elevation_deg"], 15.5);
        assert!(value.get("E05").is_some());
        let _ = std::fs::remove_file(&path);
    }
}
