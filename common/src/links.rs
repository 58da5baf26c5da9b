//! リンク文字列の補助関数

use url::Url;

/// URLのホスト部分を取り出す（スキーム省略時は http とみなす）
pub fn link_host(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    let url = if link.contains("://") {
        Url::parse(link)
    } else {
        Url::parse(&format!("http://{}", link))
    };
    url.ok()?.host_str().map(str::to_lowercase)
}

/// ホスト名が中国の動画サイトのものか
pub fn is_chinese_video_link(link: &str, host_tokens: &[String]) -> bool {
    let Some(host) = link_host(link) else {
        return false;
    };
    host_tokens
        .iter()
        .any(|token| !token.is_empty() && host.contains(&token.to_lowercase()))
}

/// `mailto:` リンクからアドレス部分を取り出す
pub fn mailto_address(href: &str) -> &str {
    let address = href.strip_prefix("mailto:").unwrap_or(href);
    address.split('?').next().unwrap_or(address)
}
