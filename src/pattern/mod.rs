//! オプションコードのワイルドカードパターンコンパイラ
//!
//! 州仕様書のセルに書かれるテンプレート（例: `AB.XXX`, `71xx`）を
//! コード全体との完全一致マッチャーに変換する。
//!
//! ## プレースホルダ
//! - `XXX`（大文字3連）: 数字3桁
//! - `xx`（小文字2連）: 数字2桁
//! - `x`（小文字単独）: 数字1桁
//! - `.` : リテラルのピリオド
//! - 空白 : 除去
//!
//! 上記以外の文字は正規表現ソースへそのまま渡す。セルに正規表現の
//! メタ文字が紛れ込んでいた場合はコンパイルエラーになり、呼び出し側
//! （照合処理）はその行を「不足」として扱う。

use crate::error::{Result, SpecCheckError};
use regex::Regex;

/// パターンの構成要素
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// 固定幅の数字列
    DigitRun(usize),
    /// リテラルのピリオド
    Dot,
    /// そのまま残す文字
    Verbatim(char),
}

/// コンパイル済みマッチャー
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// コードがパターンに完全一致するか（部分一致は不可）
    pub fn is_match(&self, code: &str) -> bool {
        self.regex.is_match(code)
    }
}

/// パターン文字列をマッチャーにコンパイルする
pub fn compile(pattern: &str) -> Result<Matcher> {
    let source = generate(&tokenize(pattern));
    let regex = Regex::new(&source)
        .map_err(|e| SpecCheckError::Pattern(format!("{}: {}", pattern, e)))?;
    Ok(Matcher { regex })
}

/// 字句解析。空白はここで捨てる
///
/// 先頭から貪欲に読むため、`xxx` は 2桁+1桁、`XXXX` は 3桁+リテラルX
/// になる。空白で分断された `X XX` はプレースホルダとして成立せず、
/// リテラルの `XXX` として残る。
fn tokenize(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c == 'X' && chars.get(i + 1) == Some(&'X') && chars.get(i + 2) == Some(&'X') {
            tokens.push(Token::DigitRun(3));
            i += 3;
        } else if c == 'x' && chars.get(i + 1) == Some(&'x') {
            tokens.push(Token::DigitRun(2));
            i += 2;
        } else if c == 'x' {
            tokens.push(Token::DigitRun(1));
            i += 1;
        } else if c == '.' {
            tokens.push(Token::Dot);
            i += 1;
        } else {
            tokens.push(Token::Verbatim(c));
            i += 1;
        }
    }

    tokens
}

/// トークン列から完全一致の正規表現ソースを組み立てる
fn generate(tokens: &[Token]) -> String {
    let mut source = String::from("^(?:");
    for token in tokens {
        match token {
            Token::DigitRun(1) => source.push_str(r"\d"),
            Token::DigitRun(n) => source.push_str(&format!(r"\d{{{}}}", n)),
            Token::Dot => source.push_str(r"\."),
            Token::Verbatim(c) => source.push(*c),
        }
    }
    source.push_str(")$");
    source
}
