//! User prompt assembly.
//!
//! [`build_user_prompt`] is a pure function of the lesson and the options:
//! the same pair always yields byte-identical text. Section order is fixed
//! so that later instructions never contradict earlier ones.

pub mod framework;

pub use framework::{NLS_FRAMEWORK_DATA, SYSTEM_INSTRUCTION};

use models::{LessonInfo, ProcessingOptions};

/// Heading of the optional curriculum distribution block.
pub const DISTRIBUTION_HEADING: &str = "PHÂN PHỐI CHƯƠNG TRÌNH (PPCT) - THAM KHẢO:";

/// Follows the distribution excerpt; asks the model to prefer it.
pub const DISTRIBUTION_ADVISORY: &str = "LƯU Ý: Nếu PPCT có quy định cụ thể về năng lực số cho bài học này, hãy ưu tiên tuân thủ PPCT.";

pub const ANALYZE_ONLY_REQUIREMENTS: &str = "\n- Chỉ phân tích giáo án gốc và đề xuất các năng lực số phù hợp.\n- KHÔNG chỉnh sửa nội dung giáo án gốc.\n";

/// Integration always travels with the preserve-formatting rule and the
/// `<u>` marker rule.
pub const INTEGRATION_REQUIREMENTS: &str = "\n- Tích hợp năng lực số vào giáo án theo hướng dẫn.\n- Giữ nguyên toàn bộ định dạng và nội dung gốc.\n- Chèn nội dung NLS bằng thẻ <u>...</u>.\n";

pub const DETAILED_REPORT_REQUIREMENT: &str = "\n- Kèm theo báo cáo chi tiết về lý do chọn từng năng lực số.\n";

/// Assemble the user prompt.
///
/// Content is embedded verbatim even when empty. The distribution block is
/// added only when its trimmed text is non-empty, but is embedded untrimmed.
pub fn build_user_prompt(lesson: &LessonInfo, options: &ProcessingOptions) -> String {
    let mut prompt = format!(
        "\nTHÔNG TIN BÀI HỌC:\n- Bộ sách: {textbook}\n- Môn học: {subject}\n- Lớp: {grade}\n\nNỘI DUNG GIÁO ÁN GỐC:\n{content}\n",
        textbook = lesson.textbook,
        subject = lesson.subject,
        grade = lesson.grade,
        content = lesson.content,
    );

    if let Some(distribution) = lesson.distribution_reference() {
        prompt.push_str(&format!(
            "\n\n{DISTRIBUTION_HEADING}\n{distribution}\n\n{DISTRIBUTION_ADVISORY}\n"
        ));
    }

    prompt.push_str(&format!(
        "\n\nKHUNG NĂNG LỰC SỐ:\n{NLS_FRAMEWORK_DATA}\n\nYÊU CẦU:\n"
    ));

    if options.analyze_only {
        prompt.push_str(ANALYZE_ONLY_REQUIREMENTS);
    } else {
        prompt.push_str(INTEGRATION_REQUIREMENTS);
    }

    if options.detailed_report {
        prompt.push_str(DETAILED_REPORT_REQUIREMENT);
    }

    prompt
}
