//! Sorting and reduction of scan results.
//!
//! This module orders scanned project files and can reduce them to the
//! latest version of each file per directory.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;

use crate::config::{ListingOptions, SortCriteria};
use crate::scanner::ScannedHipFile;

/// Apply listing options to scan results: reduce to latest versions if
/// requested, then sort.
#[must_use]
pub fn apply_listing(files: Vec<ScannedHipFile>, opts: &ListingOptions) -> Vec<ScannedHipFile> {
    let mut files = if opts.latest { keep_latest(files) } else { files };
    sort_scanned(&mut files, opts);
    files
}

/// Keep only the highest version of each `(directory, base, extension)`.
///
/// Survivors keep the position of the first file of their group.
#[must_use]
pub fn keep_latest(files: Vec<ScannedHipFile>) -> Vec<ScannedHipFile> {
    let mut latest: Vec<ScannedHipFile> = Vec::new();
    let mut positions: HashMap<(PathBuf, String, String), usize> = HashMap::new();

    for file in files {
        let key = (
            file.directory().to_path_buf(),
            file.hip.base.clone(),
            file.hip.extension.clone(),
        );

        match positions.entry(key) {
            Entry::Occupied(slot) => {
                let existing = &mut latest[*slot.get()];
                if existing.hip.version < file.hip.version {
                    *existing = file;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(latest.len());
                latest.push(file);
            }
        }
    }

    latest
}

/// Sort scan results in place according to the listing options.
///
/// When `opts.criteria` is `None`, the list is left in scan order.
/// Setting `opts.reverse` flips the resulting order.
pub fn sort_scanned(files: &mut [ScannedHipFile], opts: &ListingOptions) {
    let Some(criteria) = opts.criteria else {
        return;
    };

    match criteria {
        SortCriteria::Name => files.sort_by(compare_by_name),
        SortCriteria::Version => {
            files.sort_by(|a, b| {
                b.hip
                    .version
                    .cmp(&a.hip.version)
                    .then_with(|| compare_by_name(a, b))
            });
        }
        SortCriteria::Path => files.sort_by(|a, b| a.path.cmp(&b.path)),
    }

    if opts.reverse {
        files.reverse();
    }
}

/// Case-insensitive base, then extension, then ascending version.
fn compare_by_name(a: &ScannedHipFile, b: &ScannedHipFile) -> Ordering {
    a.hip
        .base
        .to_lowercase()
        .cmp(&b.hip.base.to_lowercase())
        .then_with(|| a.hip.extension.cmp(&b.hip.extension))
        .then_with(|| a.hip.version.cmp(&b.hip.version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hip::HipFile;
    use std::path::PathBuf;

    fn create_scanned(dir: &str, base: &str, version: u32, ext: &str) -> ScannedHipFile {
        let hip = HipFile::with_version(base, ext, version);
        ScannedHipFile {
            path: PathBuf::from(dir).join(hip.full_name()),
            hip,
        }
    }

    fn names(files: &[ScannedHipFile]) -> Vec<String> {
        files.iter().map(|f| f.hip.full_name()).collect()
    }

    fn listing(criteria: Option<SortCriteria>, reverse: bool) -> ListingOptions {
        ListingOptions {
            criteria,
            reverse,
            latest: false,
        }
    }

    #[test]
    fn test_keep_latest_per_directory() {
        let files = vec![
            create_scanned("/a", "shot", 1, "hip"),
            create_scanned("/a", "shot", 3, "hip"),
            create_scanned("/b", "shot", 2, "hip"),
            create_scanned("/a", "shot", 2, "hip"),
            create_scanned("/a", "shot", 9, "hipnc"),
        ];

        let latest = keep_latest(files);

        assert_eq!(names(&latest), ["shot_003.hip", "shot_002.hip", "shot_009.hipnc"]);
        assert_eq!(latest[0].path, PathBuf::from("/a/shot_003.hip"));
        assert_eq!(latest[1].path, PathBuf::from("/b/shot_002.hip"));
    }

    #[test]
    fn test_keep_latest_first_appearance_order_across_many_groups() {
        let mut files = Vec::new();
        for version in 1..=3 {
            for shot in (0..50).rev() {
                files.push(create_scanned("/show", &format!("sh{shot:03}"), version, "hip"));
            }
        }

        let latest = keep_latest(files);

        assert_eq!(latest.len(), 50);
        assert_eq!(latest[0].hip.full_name(), "sh049_003.hip");
        assert_eq!(latest[49].hip.full_name(), "sh000_003.hip");
        assert!(latest.iter().all(|f| f.hip.version == 3));
    }

    #[test]
    fn test_sort_none_preserves_order() {
        let mut files = vec![
            create_scanned("/a", "zeta", 1, "hip"),
            create_scanned("/a", "alpha", 1, "hip"),
        ];

        sort_scanned(&mut files, &listing(None, true));

        assert_eq!(names(&files), ["zeta_001.hip", "alpha_001.hip"]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut files = vec![
            create_scanned("/a", "beta", 2, "hip"),
            create_scanned("/a", "Alpha", 1, "hip"),
            create_scanned("/a", "beta", 1, "hip"),
        ];

        sort_scanned(&mut files, &listing(Some(SortCriteria::Name), false));

        assert_eq!(names(&files), ["Alpha_001.hip", "beta_001.hip", "beta_002.hip"]);
    }

    #[test]
    fn test_sort_by_version_highest_first() {
        let mut files = vec![
            create_scanned("/a", "a", 1, "hip"),
            create_scanned("/a", "b", 10, "hip"),
            create_scanned("/a", "c", 5, "hip"),
        ];

        sort_scanned(&mut files, &listing(Some(SortCriteria::Version), false));
        assert_eq!(names(&files), ["b_010.hip", "c_005.hip", "a_001.hip"]);

        sort_scanned(&mut files, &listing(Some(SortCriteria::Version), true));
        assert_eq!(names(&files), ["a_001.hip", "c_005.hip", "b_010.hip"]);
    }

    #[test]
    fn test_sort_by_path() {
        let mut files = vec![
            create_scanned("/z", "a", 1, "hip"),
            create_scanned("/a", "z", 1, "hip"),
        ];

        sort_scanned(&mut files, &listing(Some(SortCriteria::Path), false));

        assert_eq!(files[0].path, PathBuf::from("/a/z_001.hip"));
        assert_eq!(files[1].path, PathBuf::from("/z/a_001.hip"));
    }

    #[test]
    fn test_apply_listing_latest_then_sort() {
        let files = vec![
            create_scanned("/a", "b", 1, "hip"),
            create_scanned("/a", "a", 1, "hip"),
            create_scanned("/a", "b", 4, "hip"),
        ];
        let opts = ListingOptions {
            criteria: Some(SortCriteria::Name),
            reverse: false,
            latest: true,
        };

        let result = apply_listing(files, &opts);

        assert_eq!(names(&result), ["a_001.hip", "b_004.hip"]);
    }
}
