// Dispatcher behaviour: detection, passthrough, strict decompression and the
// three error kinds callers branch on.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use bytes::Bytes;
    use flate2::{write::DeflateEncoder, write::GzEncoder, Compression};
    use rand::Rng;

    use compress_core::prelude::*;
    use compress_core::constants::DEFLATE_MAGIC;

    fn gzip(data: &[u8]) -> ByteView {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        ByteView::from(enc.finish().unwrap())
    }

    fn dfl(data: &[u8]) -> ByteView {
        let mut enc = DeflateEncoder::new(DEFLATE_MAGIC.to_vec(), Compression::best());
        enc.write_all(data).unwrap();
        ByteView::from(enc.finish().unwrap())
    }

    fn deflate_dispatcher() -> Dispatcher {
        Dispatcher::from_config(&CompressionConfig::with_codec(CodecKind::Deflate)).unwrap()
    }

// # ✅ 1. Compressed "hello world" is detected and decoded

    #[test]
    fn gzip_hello_world_is_detected_and_decoded() {
        let d = Dispatcher::default();
        let wire = gzip(b"hello world");
        assert_eq!(wire.get(0), Some(0x1f));
        assert_eq!(wire.get(1), Some(0x8b));

        assert!(d.is_compressed(&wire));
        assert_eq!(d.codec_for(&wire).map(|c| c.kind()), Some(CodecKind::Gzip));

        let out = d.decompress(&wire).unwrap();
        assert_eq!(out.len(), 11);
        assert_eq!(out, &b"hello world"[..]);
    }

// # ✅ 2. Plain structured content passes through by identity

    #[test]
    fn json_passes_through_unchanged() {
        let d = Dispatcher::default();
        let doc = ByteView::from(br#"{"user":"kimchy","message":"trying out"}"#.to_vec());

        assert!(!d.is_compressed(&doc));
        assert!(d.codec_for(&doc).is_none());

        let out = d.decompress_if_needed(doc.clone()).unwrap();
        assert!(out.ptr_eq(&doc));
    }

    #[test]
    fn composite_plain_view_passes_through_unchanged() {
        let d = Dispatcher::default();
        let doc = ByteView::composite(vec![
            Bytes::from_static(b"---\n"),
            Bytes::from_static(b"key: value\n"),
        ]);
        let out = d.decompress_if_needed(doc.clone()).unwrap();
        assert!(out.ptr_eq(&doc));
        assert!(out.is_composite());
    }

// # ❌ 3. Two bytes that match nothing: not compressed, strict decode refuses

    #[test]
    fn random_short_bytes_are_not_compressed() {
        let d = Dispatcher::default();
        let sniffer = XContentSniffer;
        let mut rng = rand::thread_rng();

        for _ in 0..64 {
            let pair: [u8; 2] = rng.gen();
            let view = ByteView::from(pair.to_vec());
            if sniffer.sniff(&view).is_some() {
                continue;
            }
            assert!(!d.is_compressed(&view));
            let err = d.decompress(&view).unwrap_err();
            assert!(matches!(err, CompressError::NotCompressed));
            assert_eq!(err.kind(), CompressErrorKind::NotCompressed);
        }
    }

    #[test]
    fn empty_view_is_not_compressed() {
        let d = Dispatcher::default();
        let empty = ByteView::empty();
        assert!(!d.is_compressed(&empty));
        assert!(d.decompress_if_needed(empty.clone()).unwrap().is_empty());
        assert!(matches!(d.decompress(&empty), Err(CompressError::NotCompressed)));
    }

// # ❌ 4. Absent input is an invalid argument, never "not compressed"

    #[test]
    fn absent_input_is_rejected_everywhere() {
        let d = Dispatcher::default();

        let err = d.try_decompress_if_needed(None).unwrap_err();
        assert_eq!(err.kind(), CompressErrorKind::InvalidArgument);

        assert!(matches!(d.try_is_compressed(None), Err(CompressError::InvalidArgument(_))));
        assert!(matches!(d.try_codec_for(None), Err(CompressError::InvalidArgument(_))));
        assert!(matches!(d.try_decompress(None), Err(CompressError::InvalidArgument(_))));
    }

    #[test]
    fn present_input_goes_through_checked_entry_points() {
        let d = Dispatcher::default();
        let wire = gzip(b"abc");
        assert!(d.try_is_compressed(Some(&wire)).unwrap());
        assert!(d.try_codec_for(Some(&wire)).unwrap().is_some());
        assert_eq!(d.try_decompress(Some(&wire)).unwrap(), &b"abc"[..]);
        assert_eq!(d.try_decompress_if_needed(Some(wire)).unwrap(), &b"abc"[..]);
    }

// # ❌ 5. Decoder failures surface as I/O-class errors with the cause kept

    #[test]
    fn corrupt_payload_is_a_decompression_error() {
        let d = Dispatcher::default();
        let mut raw = gzip(b"some longer payload to corrupt").to_vec();
        let n = raw.len();
        raw[n - 3] ^= 0xff;
        let wire = ByteView::from(raw);

        assert!(d.is_compressed(&wire));
        let err = d.decompress_if_needed(wire).unwrap_err();
        assert_eq!(err.kind(), CompressErrorKind::Decompression);
        let cause = err.io_error().map(|e| e.kind()).unwrap();

        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), cause);
    }

    #[test]
    fn oversized_output_is_a_decompression_error() {
        let cfg = CompressionConfig { max_decompressed_len: Some(16), ..Default::default() };
        let d = Dispatcher::from_config(&cfg).unwrap();
        let err = d.decompress(&gzip(&[b'a'; 1024])).unwrap_err();
        assert_eq!(err.kind(), CompressErrorKind::Decompression);
    }

// # ✅ 6. Only the installed codec is consulted

    #[test]
    fn deflate_dispatcher_ignores_gzip() {
        let d = deflate_dispatcher();
        let g = gzip(b"payload");
        assert!(!d.is_compressed(&g));
        assert!(d.decompress_if_needed(g.clone()).unwrap().ptr_eq(&g));

        let wire = dfl(b"payload");
        assert_eq!(d.codec().kind(), CodecKind::Deflate);
        assert_eq!(d.decompress(&wire).unwrap(), &b"payload"[..]);
        assert!(!Dispatcher::default().is_compressed(&wire));
    }

    #[test]
    fn split_compressed_view_decodes() {
        let d = deflate_dispatcher();
        let flat = dfl(b"split across several buffers").to_vec();
        let parts = flat.chunks(3).map(Bytes::copy_from_slice).collect();
        let view = ByteView::composite(parts);
        assert!(d.is_compressed(&view));
        assert_eq!(d.decompress(&view).unwrap(), &b"split across several buffers"[..]);
    }

// # ⚠️ 7. Disjointness cross-check against the content sniffer

    #[derive(Debug)]
    struct EverythingIsJson;

    impl ContentSniffer for EverythingIsJson {
        fn sniff(&self, _bytes: &ByteView) -> Option<XContentType> {
            Some(XContentType::Json)
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "payload detected as both")]
    fn overlapping_sniffer_trips_debug_check() {
        let d = Dispatcher::new(
            Box::new(compress_core::compression::codecs::GzipCodec::default()),
            Arc::new(EverythingIsJson),
        );
        d.is_compressed(&gzip(b"x"));
    }

    #[test]
    fn disabled_check_never_consults_sniffer() {
        let cfg = CompressionConfig { check_disjoint: false, ..Default::default() };
        let d = Dispatcher::from_config_with_sniffer(&cfg, Arc::new(EverythingIsJson)).unwrap();
        assert!(d.is_compressed(&gzip(b"x")));
    }

    #[test]
    fn sniffer_never_overlaps_installed_codecs() {
        let sniffer = XContentSniffer;
        assert_eq!(sniffer.sniff(&gzip(b"{\"a\":1}")), None);
        assert_eq!(sniffer.sniff(&dfl(b"{\"a\":1}")), None);
    }

// # ✅ 8. Stateless and shareable across threads

    #[test]
    fn concurrent_callers_share_one_dispatcher() {
        let d = Arc::new(Dispatcher::default());
        let wire = gzip(b"shared");
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let d = Arc::clone(&d);
                let wire = wire.clone();
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        d.decompress(&wire).unwrap()
                    } else {
                        d.decompress_if_needed(wire).unwrap()
                    }
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), &b"shared"[..]);
        }
    }
}
