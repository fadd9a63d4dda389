use projgen_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_paths_never_contain_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn stem_plus_extension_rebuilds_file_name(stem in "[A-Za-z][A-Za-z0-9_.]{0,12}", ext in "[a-z]{1,6}") {
        let name = format!("{stem}.{ext}");
        let path = NormalizedPath::new(format!("Assets/{name}"));
        prop_assert_eq!(path.extension(), Some(ext.as_str()));
        prop_assert_eq!(format!("{}.{}", path.file_stem().unwrap(), ext), name);
    }
}
