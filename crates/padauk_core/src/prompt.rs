//! Translation prompt construction.

/// Build the customer-service translation prompt for a source text.
///
/// The prompt auto-detects direction (Burmese → Chinese or Chinese →
/// Burmese), asks for tone preservation, and pins the domain vocabulary
/// with a common-terms reference block so short banking phrases translate
/// consistently.
///
/// # Examples
///
/// ```
/// use padauk_core::translation_prompt;
///
/// let prompt = translation_prompt("ငွေထုတ်");
/// assert!(prompt.contains("ငွေထုတ်"));
/// assert!(prompt.contains("Translation Rules"));
/// ```
pub fn translation_prompt(source_text: &str) -> String {
    format!(
        r#"Translate naturally between Burmese (Myanmar) and Chinese for customer service communication.

**Translation Rules:**
- Auto-detect source language (Burmese → Chinese or Chinese → Burmese)
- Preserve the original tone, emotion, and intent
- Use natural, conversational language appropriate for customer service
- Handle mixed languages smoothly
- Keep numbers, dates, and usernames unchanged
- Return ONLY the translation without explanations or labels

**Common Terms Reference:**
• Withdrawal: ငွေထုတ် / 提款
• Deposit: ငွေသွင်း / 存款
• Balance: လက်ကျန်ငွေ / 余额
• Account: အကောင့် / 账户
• Processing: လုပ်ဆောင်နေ / 处理中
• Pending: စောင့်ဆိုင်းနေ / 待处理
• Bonus: ဘောနပ်စ် / 红利
• Problem/Issue: ပြဿနာ / 问题
• Help/Support: အကူအညီ / 帮助
• Customer Service: ဖောက်သည်ဝန်ဆောင်မှု / 客服
• Verification: အတည်ပြု / 验证
• Transaction: ငွေလွှဲ / 交易

Translate: "{source_text}""#
    )
}
