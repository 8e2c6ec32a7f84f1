use crate::bundle::{AppBundle, BundleMetadata, PlistReader};
use crate::stack::Category;
use plist::Value;

const WRAPPED_CATEGORIES_KEY: &str = "categories";

/// Maps declared metadata to a [`Category`], independent of the detected stack
pub struct CategoryExtractor;

impl CategoryExtractor {
    pub fn extract(
        &self,
        reader: &dyn PlistReader,
        bundle: &AppBundle,
        metadata: &BundleMetadata,
    ) -> Category {
        match bundle.wrapper_metadata_path() {
            Some(path) => reader
                .read_dictionary(&path)
                .and_then(|dict| {
                    dict.get(WRAPPED_CATEGORIES_KEY)
                        .and_then(Value::as_array)
                        .and_then(|values| first_mapped(values))
                })
                .unwrap_or_default(),
            None => metadata
                .category
                .as_deref()
                .map(Category::from_declared)
                .unwrap_or_default(),
        }
    }
}

fn first_mapped(values: &[Value]) -> Option<Category> {
    values
        .iter()
        .filter_map(Value::as_string)
        .map(Category::from_declared)
        .find(|category| *category != Category::Uncategorized)
}
