//! Property-based tests for resolution helpers.

use super::{cluster_from_context, find_cluster_location, LanguageAllowList};
use crate::EnvironmentFlags;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn image_path_is_repo_name_tag(
        repo in "[a-z0-9./-]{1,40}",
        name in "[a-z0-9-]{1,30}",
        tag in "[a-zA-Z0-9._-]{1,20}"
    ) {
        let flags = EnvironmentFlags::builder()
            .docker_repo(repo.clone())
            .tag(tag.clone())
            .build();
        prop_assert_eq!(flags.image_path(&name), format!("{repo}/{name}:{tag}"));
    }

    #[test]
    fn context_yields_final_segment(
        prefix in "[a-z0-9_-]{0,30}",
        cluster in "[a-z0-9-]{0,30}",
        trailing in "[ \r\n]{0,3}"
    ) {
        let context = format!("{prefix}_{cluster}{trailing}");
        prop_assert_eq!(cluster_from_context(&context).unwrap(), cluster);
    }

    #[test]
    fn context_without_underscore_is_rejected(context in "[a-z0-9-]{0,30}") {
        prop_assert!(cluster_from_context(&context).is_err());
    }

    #[test]
    fn listed_cluster_is_found(
        others in prop::collection::vec(("[a-z]{1,10}", "[a-z0-9-]{1,12}"), 0..5),
        location in "[a-z0-9-]{1,12}"
    ) {
        let mut listing = String::new();
        for (name, loc) in &others {
            listing.push_str(&format!("other-{name} {loc}\n"));
        }
        listing.push_str(&format!("target {location}\n"));

        prop_assert_eq!(find_cluster_location(&listing, "target"), Some(location.as_str()));
    }

    #[test]
    fn allow_list_contains_every_entry(entries in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let list = LanguageAllowList::parse(&entries.join(","));
        for entry in &entries {
            prop_assert!(list.contains(entry));
            prop_assert!(list.allows(entry));
        }
        prop_assert!(list.len() <= entries.len());
    }
}
