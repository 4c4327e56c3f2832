//! Fixed reference texts sent with every request.
//!
//! The framework summarises the digital competency framework for learners
//! (Khung năng lực số, Thông tư 02/2025/TT-BGDĐT) by domain and component.

/// System-level instruction. Not user-controllable.
pub const SYSTEM_INSTRUCTION: &str = r#"Bạn là chuyên gia giáo dục Việt Nam về tích hợp năng lực số (NLS) vào kế hoạch bài dạy theo Khung năng lực số dành cho người học.

Nguyên tắc làm việc:
1. Đọc kỹ giáo án gốc, xác định các hoạt động học tập có thể gắn với năng lực số.
2. Chỉ chọn những thành phần năng lực số phù hợp với môn học, lớp và nội dung bài học; không gượng ép.
3. Ghi rõ mã thành phần năng lực (ví dụ: 1.1, 2.4, 6.2) cùng với mức độ phù hợp với cấp học.
4. Mô tả cụ thể hoạt động của giáo viên và học sinh khi sử dụng công nghệ số.
5. Trả lời hoàn toàn bằng tiếng Việt, trình bày rõ ràng, giữ nguyên cấu trúc giáo án khi được yêu cầu."#;

/// Competency framework reference text.
pub const NLS_FRAMEWORK_DATA: &str = r#"Miền 1. Khai thác dữ liệu và thông tin
  1.1 Duyệt, tìm kiếm và lọc dữ liệu, thông tin và nội dung số
  1.2 Đánh giá dữ liệu, thông tin và nội dung số
  1.3 Quản lý dữ liệu, thông tin và nội dung số

Miền 2. Giao tiếp và hợp tác trong môi trường số
  2.1 Tương tác thông qua công nghệ số
  2.2 Chia sẻ thông qua công nghệ số
  2.3 Tham gia với tư cách công dân thông qua công nghệ số
  2.4 Hợp tác thông qua công nghệ số
  2.5 Quy tắc ứng xử trên mạng
  2.6 Quản lý danh tính số

Miền 3. Sáng tạo nội dung số
  3.1 Phát triển nội dung số
  3.2 Tích hợp và tạo lập lại nội dung số
  3.3 Thực thi bản quyền và giấy phép
  3.4 Lập trình

Miền 4. An toàn
  4.1 Bảo vệ thiết bị
  4.2 Bảo vệ dữ liệu cá nhân và quyền riêng tư
  4.3 Bảo vệ sức khỏe và an sinh số
  4.4 Bảo vệ môi trường

Miền 5. Giải quyết vấn đề
  5.1 Giải quyết các vấn đề kỹ thuật
  5.2 Xác định nhu cầu và giải pháp công nghệ
  5.3 Sử dụng sáng tạo công nghệ số
  5.4 Xác định các vấn đề cần cải thiện về năng lực số

Miền 6. Ứng dụng trí tuệ nhân tạo
  6.1 Hiểu biết về trí tuệ nhân tạo
  6.2 Sử dụng trí tuệ nhân tạo
  6.3 Đánh giá trí tuệ nhân tạo

Mức độ theo cấp học:
  Cơ bản 1 (CB1): lớp 1-3; Cơ bản 2 (CB2): lớp 4-5
  Trung cấp 1 (TC1): lớp 6-7; Trung cấp 2 (TC2): lớp 8-9
  Nâng cao 1 (NC1): lớp 10-12"#;
