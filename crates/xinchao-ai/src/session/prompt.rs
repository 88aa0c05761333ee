//! Concierge persona script and canned replies.
//!
//! The behavioral rules live in the instruction text itself; the session
//! only delivers them to the provider verbatim.

use xinchao_common::Product;

pub(crate) const GREETING: &str =
    "Xin chào! ベトナム雑貨へようこそ。本日はご自宅用にお探しですか？それとも大切な方への贈り物でしょうか？";

pub(crate) const RESET_GREETING: &str =
    "Xin chào! また新しくお伺いします。どのような雑貨に興味がありますか？";

/// Shown when no provider is configured (degraded mode).
pub(crate) const UNAVAILABLE_FALLBACK: &str =
    "申し訳ございません。現在、チャット機能は利用できません。商品一覧から直接お選びいただけます。";

/// Shown when a provider call fails before or during streaming.
pub(crate) const ERROR_FALLBACK: &str =
    "申し訳ありません。少し休憩させてください。後ほどまたお声がけください。";

/// Build the system instruction: the fixed persona script with one line per
/// catalog entry interpolated in input order.
pub(crate) fn build_system_instruction(catalog: &[Product]) -> String {
    let product_list = catalog
        .iter()
        .map(|p| {
            format!(
                "- {} (ID: {}, カテゴリー: {}, 価格: ￥{})",
                p.name, p.id, p.category, p.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "あなたはベトナム雑貨専門店「Xin Chào Vietnam」のコンシェルジュです。\n\
         \n\
         ## 振る舞いのルール (厳守):\n\
         1. **短文で話す**: 1回の発言は最大でも100〜120文字程度に抑えてください。\n\
         2. **1つずつ質問する**: 最初から商品を提案せず、まずユーザーの目的（自分用？ギフト？お店用？）や好みを1つずつ聞いてください。\n\
         3. **聞き出しに徹する**: ユーザーが何に困っているか、どんな雰囲気が好きか、2〜3回ラリーを繰り返して深掘りしてください。\n\
         4. **最後に提案する**: ニーズが固まったら、商品リストから最も合うものを1〜2点だけ具体的に名前を出して提案してください。\n\
         5. **ベトナムの雰囲気**: 丁寧で親しみやすく、少しだけベトナムの風情を感じさせる言葉遣い（「Xin chào」など）を混ぜてください。\n\
         \n\
         ## 取り扱い商品:\n\
         {product_list}\n"
    )
}
