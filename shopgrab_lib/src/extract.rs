//! Field Extractor: reads the four product fields from one listing node.
//!
//! Each field is attempted independently as a small function returning an
//! `Option`; a missing element yields the sentinel for that field only.
//! Only infrastructure faults (stale node, dead session) propagate, and the
//! harvester handles those by skipping the node.

use shopgrab_browser::{ListingNode, SessionError};

use crate::assets::AssetStore;
use crate::record::{ProductRecord, SENTINEL};

const TITLE_SELECTOR: &str = "h2";
const PRICE_WHOLE_SELECTOR: &str = "span.a-price-whole";
const PRICE_FRACTION_SELECTOR: &str = "span.a-price-fraction";
const RATING_SELECTOR: &str = "span.a-icon-alt";
const IMAGE_SELECTOR: &str = "img.s-image";

/// How much of the title is carried into the stored image name.
const IMAGE_NAME_TITLE_CHARS: usize = 30;
/// Image-name stem used when the title itself is missing.
const FALLBACK_IMAGE_STEM: &str = "product";

/// Extracts one [`ProductRecord`] from a listing node, downloading its
/// thumbnail through `assets` as a side effect.
///
/// `sequence_index` is the number of records already harvested; it suffixes
/// the stored image name so repeated titles do not collide.
pub async fn extract<N: ListingNode>(
    node: &N,
    assets: &AssetStore,
    sequence_index: usize,
) -> Result<ProductRecord, SessionError> {
    let title = title(node).await?;
    let price = price(node).await?;
    let rating = rating(node).await?;
    let image_url = image_url(node).await?;

    // The fetcher is only ever invoked when the listing actually carries an
    // image source; a failed download degrades to the sentinel.
    let image_filename = match image_url {
        Some(url) => {
            let stem = image_name_stem(title.as_deref(), sequence_index);
            assets.fetch_and_store(Some(&url), &stem).await
        }
        None => None,
    };

    Ok(ProductRecord {
        title: title.unwrap_or_else(|| SENTINEL.to_string()),
        price: price.unwrap_or_else(|| SENTINEL.to_string()),
        rating: rating.unwrap_or_else(|| SENTINEL.to_string()),
        image_filename: image_filename.unwrap_or_else(|| SENTINEL.to_string()),
    })
}

/// Text of the first heading element within the node.
async fn title<N: ListingNode>(node: &N) -> Result<Option<String>, SessionError> {
    Ok(node
        .text_of(TITLE_SELECTOR)
        .await?
        .map(|text| text.trim().to_string()))
}

/// Whole and fraction sub-elements joined as `$<whole>.<fraction>`.
/// Both halves or nothing; a lone whole or fraction is never emitted.
async fn price<N: ListingNode>(node: &N) -> Result<Option<String>, SessionError> {
    let whole = node.text_of(PRICE_WHOLE_SELECTOR).await?;
    let fraction = node.text_of(PRICE_FRACTION_SELECTOR).await?;
    Ok(match (whole, fraction) {
        (Some(whole), Some(fraction)) => Some(format!("${}.{}", whole, fraction)),
        _ => None,
    })
}

/// The token before the first space of the icon-alt markup, stored raw
/// without numeric validation even if malformed.
async fn rating<N: ListingNode>(node: &N) -> Result<Option<String>, SessionError> {
    Ok(node
        .attr_of(RATING_SELECTOR, "innerHTML")
        .await?
        .map(|alt| alt.split(' ').next().unwrap_or("").to_string()))
}

async fn image_url<N: ListingNode>(node: &N) -> Result<Option<String>, SessionError> {
    node.attr_of(IMAGE_SELECTOR, "src").await
}

fn image_name_stem(title: Option<&str>, sequence_index: usize) -> String {
    let stem: String = match title {
        Some(title) => title.chars().take(IMAGE_NAME_TITLE_CHARS).collect(),
        None => FALLBACK_IMAGE_STEM.to_string(),
    };
    format!("{}_{}", stem, sequence_index)
}
