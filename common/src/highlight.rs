//! 著者名の強調表示
//!
//! 著者欄のテキストに設定した名前があれば `<strong>` で囲む。
//! 既に強調済みなら何もしないので、何度適用しても結果は変わらない。

/// 名前を `<strong>` で囲んだ文字列
pub fn emphasized(name: &str) -> String {
    format!("<strong>{}</strong>", name)
}

/// 出現箇所をすべて強調する（出版物用）
///
/// 共同第一著者を示す `*` が名前の前後に付いていても、`*` は強調の外側に残る。
/// `<strong>名前</strong>` が既にあれば入力をそのまま返す。
pub fn highlight_author(text: &str, name: &str) -> String {
    if name.is_empty() || !text.contains(name) || text.contains(&emphasized(name)) {
        return text.to_string();
    }
    text.replace(name, &emphasized(name))
}

/// `<strong>` がどこにも無い場合だけ強調する（プレプリント用）
pub fn highlight_author_if_unmarked(text: &str, name: &str) -> String {
    if text.contains("<strong>") {
        return text.to_string();
    }
    highlight_author(text, name)
}
