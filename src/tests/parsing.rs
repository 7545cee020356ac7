#[cfg(test)]
mod test {
    use crate::{
        navigation::NavRecord,
        prelude::*,
        tests::toolkit::{random_name, test_resource},
    };
    use std::str::FromStr;

    #[test]
    fn repo_parsing() {
        let test_resources = test_resource("");
        for entry in std::fs::read_dir(test_resources).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            let filename = entry.file_name().to_str().unwrap().to_string();

            // discard hidden files
            if filename.starts_with('.') {
                continue;
            }

            if filename.ends_with(".gz") {
                #[cfg(feature = "flate2")]
                {
                    let nav = NavFile::from_gzip_file(&path);
                    assert!(nav.is_ok(), "error parsing \"{}\"", filename);
                }
                continue;
            }

            println!("Parsing \"{}\"", path.display());
            let nav = NavFile::from_file(&path);
            assert!(
                nav.is_ok(),
                "error parsing \"{}\": {:?}",
                filename,
                nav.as_ref().err()
            );
            let nav = nav.unwrap();
            assert!(nav.header.is_navigation());
            assert!(nav.header.version.unwrap().is_supported());
        }
    }

    #[test]
    fn single_block() {
        let nav = NavFile::from_file(test_resource("SINGLE00TST_R_20220010000_01D_GN.rnx")).unwrap();
        assert_eq!(nav.header.version, Some(Version::new(3, 5)));
        assert_eq!(nav.record.len(), 1);

        let g01 = SV::from_str("G01").unwrap();
        let ephemerides = nav.record.get(&g01).unwrap();
        assert_eq!(ephemerides.len(), 1);

        let eph = &ephemerides[0];
        assert_eq!(eph.sv, g01);
        assert_eq!(eph.epoch, Epoch::from_gregorian_utc(2022, 1, 1, 0, 0, 0, 0));
        assert_eq!(eph.toe, 5.184000000000E+05);
        assert_eq!(eph.sqrt_a, 5.153653684616E+03);
        assert_eq!(eph.e, 1.018157275394E-02);
        assert_eq!(eph.week, 2190.0);
        assert_eq!(eph.fit_interval, 4.0);
    }

    #[test]
    fn gps_file() {
        let nav = NavFile::from_file(test_resource("BRDC00TST_R_20220010000_01D_GN.rnx")).unwrap();

        assert_eq!(nav.header.constellation, Some(Constellation::GPS));
        assert_eq!(nav.header.program.as_deref(), Some("skyplot-tests"));
        assert_eq!(
            nav.header.comments,
            vec!["Synthetic GPS broadcast ephemerides".to_string()]
        );

        let vehicles = nav.record.keys().map(|sv| sv.prn).collect::<Vec<_>>();
        assert_eq!(vehicles, vec![1, 3, 7, 8, 12, 17, 24, 30]);
        assert_eq!(nav.record.total_ephemerides(), 11);

        let g08 = SV::from_str("G08").unwrap();
        let ephemerides = nav.record.get(&g08).unwrap();
        assert_eq!(ephemerides.len(), 2);
        assert_eq!(ephemerides[0].toe, 5.184000000000E+05);
        assert_eq!(ephemerides[1].toe, 5.256000000000E+05);
        assert_eq!(nav.record.latest_ephemeris(&g08).unwrap().toe, 5.256000000000E+05);

        let summary = nav.summary();
        assert_eq!(summary.satellites, 8);
        assert_eq!(summary.epochs, 2);
        assert_eq!(
            summary.first,
            Some(Epoch::from_gregorian_utc(2022, 1, 1, 0, 0, 0, 0))
        );
        assert_eq!(
            summary.last,
            Some(Epoch::from_gregorian_utc(2022, 1, 1, 2, 0, 0, 0))
        );
        assert_eq!(summary.constellations.len(), 1);
        assert_eq!(summary.constellations.get(&Constellation::GPS), Some(&8));
    }

    #[test]
    fn mixed_corrupt_file() {
        let nav = NavFile::from_file(test_resource("MIXED00TST_R_20220010000_01D_MN.rnx")).unwrap();
        assert_eq!(nav.header.constellation, Some(Constellation::Mixed));
        assert_eq!(nav.header.comments.len(), 2);

        // G04: corrupt epoch, R05: unsupported layout, G11: truncated
        let mut vehicles = nav
            .record
            .keys()
            .map(|sv| sv.to_string())
            .collect::<Vec<_>>();
        vehicles.sort();
        assert_eq!(vehicles, vec!["E05", "G02", "G09", "G10"]);

        let e05 = SV::from_str("E05").unwrap();
        let eph = &nav.record.get(&e05).unwrap()[0];
        // FORTRAN exponent
        assert_eq!(eph.toe, 5.184000000000E+05);
        assert_eq!(eph.epoch, Epoch::from_gregorian_utc(2022, 1, 1, 0, 10, 0, 0));
        assert_eq!(eph.sqrt_a, 5.440612319946E+03);

        let summary = nav.summary();
        assert_eq!(summary.satellites, 4);
        assert_eq!(summary.epochs, 3);
        assert_eq!(summary.constellations.get(&Constellation::GPS), Some(&3));
        assert_eq!(summary.constellations.get(&Constellation::Galileo), Some(&1));
        assert!(summary.constellations.get(&Constellation::Glonass).is_none());
    }

    #[test]
    fn header_only_file() {
        let nav = NavFile::from_file(test_resource("EMPTY00TST_R_20220010000_01D_GN.rnx")).unwrap();
        assert!(nav.is_empty());
        assert_eq!(nav.header.version, Some(Version::new(3, 4)));
        let summary = nav.summary();
        assert_eq!(summary.satellites, 0);
        assert!(summary.first.is_none());
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join(random_name(12));
        match NavFile::from_file(&path) {
            Err(Error::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expecting FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn in_memory_parsing() {
        let content = std::fs::read_to_string(test_resource("SINGLE00TST_R_20220010000_01D_GN.rnx")).unwrap();
        let nav = NavFile::parse(content.as_bytes()).unwrap();
        assert_eq!(nav.record.len(), 1);

        // no header terminator: nothing is decoded
        let body = content
            .lines()
            .filter(|l| !l.contains("END OF HEADER"))
            .collect::<Vec<_>>()
            .join("\n");
        let nav = NavFile::parse(body.as_bytes()).unwrap();
        assert!(nav.is_empty());

        let nav = NavFile::parse("".as_bytes()).unwrap();
        assert!(nav.is_empty());
    }

    #[test]
    fn non_utf8_content() {
        let content = std::fs::read(test_resource("SINGLE00TST_R_20220010000_01D_GN.rnx")).unwrap();
        let reference = NavFile::parse(&content[..]).unwrap();

        // Latin-1 degree sign in a header comment
        let mut comment = b"Station at 41\xb0N 1\xb0E".to_vec();
        comment.resize(60, b' ');
        comment.extend_from_slice(b"COMMENT\n");

        let marker = b"END OF HEADER";
        let pos = content
            .windows(marker.len())
            .position(|w| w == marker)
            .unwrap();
        let line_start = content[..pos]
            .iter()
            .rposition(|b| *b == b'\n')
            .map(|p| p + 1)
            .unwrap_or(0);

        let mut corrupt = content[..line_start].to_vec();
        corrupt.extend_from_slice(&comment);
        corrupt.extend_from_slice(&content[line_start..]);

        let nav = NavFile::parse(&corrupt[..]).unwrap();
        assert_eq!(nav.record, reference.record);

        // trailing garbage byte on the last line of the block
        let mut corrupt = content.clone();
        while corrupt.last() == Some(&b'\n') {
            corrupt.pop();
        }
        corrupt.extend_from_slice(b" \xb0\n");

        let nav = NavFile::parse(&corrupt[..]).unwrap();
        assert_eq!(nav.record.len(), 1);
        let g01 = SV::from_str("G01").unwrap();
        let eph = &nav.record.get(&g01).unwrap()[0];
        let expected = &reference.record.get(&g01).unwrap()[0];
        assert_eq!(eph.transmission_time, expected.transmission_time);
        assert_eq!(eph.toe, expected.toe);
    }

    #[test]
    fn written_file() {
        let content = std::fs::read_to_string(test_resource("SINGLE00TST_R_20220010000_01D_GN.rnx")).unwrap();
        // windows line terminations
        let content = content.replace('\n', "\r\n");
        let path = std::env::temp_dir().join(format!("{}.rnx", random_name(8)));
        std::fs::write(&path, content).unwrap();
        let nav = NavFile::from_file(&path);
        let _ = std::fs::remove_file(&path);
        let nav = nav.unwrap();
        assert_eq!(nav.record.len(), 1);
        let eph = nav.record.values().next().unwrap();
        assert_eq!(eph[0].toe, 5.184000000000E+05);
    }

    #[test]
    #[cfg(feature = "flate2")]
    fn gzip_file() {
        let plain = NavFile::from_file(test_resource("BRDC00TST_R_20220010000_01D_GN.rnx")).unwrap();
        let gzip = NavFile::from_file(test_resource("BRDC00TST_R_20220010000_01D_GN.rnx.gz")).unwrap();
        assert_eq!(plain, gzip);
    }
}
