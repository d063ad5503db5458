//! The LangLeague starter course: two Korean books, four chapters, forty words.

use crate::models::{Book, Chapter, ProficiencyLevel, Word};

const BOOK_THUMBNAIL: &str = "https://images.unsplash.com/photo-1516414447565-b14be0adf13e?w=400";

pub const BOOKS: &[Book<'static>] = &[
    Book {
        id: 1,
        title: "기초 한국어 (Basic Korean)",
        author: "한국어 교육원",
        description: "Giáo trình tiếng Hàn cơ bản dành cho người mới bắt đầu",
        level: ProficiencyLevel::Beginner,
        thumbnail_url: BOOK_THUMBNAIL,
    },
    Book {
        id: 2,
        title: "일상 대화 (Daily Conversations)",
        author: "이지영",
        description: "Học tiếng Hàn giao tiếp hàng ngày",
        level: ProficiencyLevel::Beginner,
        thumbnail_url: BOOK_THUMBNAIL,
    },
];

const fn chapter(
    id: i64,
    book_id: i64,
    chapter_number: i32,
    title: &'static str,
    content: &'static str,
) -> Chapter<'static> {
    Chapter {
        id,
        book_id,
        chapter_number,
        title,
        content,
        order_index: chapter_number,
        is_published: true,
    }
}

pub const CHAPTERS: &[Chapter<'static>] = &[
    chapter(
        1,
        1,
        1,
        "Insa wa Soggae (Greetings & Introductions)",
        "Greetings chapter",
    ),
    chapter(2, 1, 2, "Family (Gajok)", "Family vocabulary"),
    chapter(3, 2, 1, "Restaurant (Sikdang)", "Restaurant vocabulary"),
    chapter(4, 2, 2, "Shopping (Syoping)", "Shopping vocabulary"),
];

#[allow(clippy::too_many_arguments)]
const fn word(
    id: i64,
    text: &'static str,
    meaning: &'static str,
    pronunciation: &'static str,
    part_of_speech: &'static str,
    image_url: Option<&'static str>,
    chapter_id: i64,
    order_index: i32,
) -> Word<'static> {
    Word {
        id,
        text,
        meaning,
        pronunciation,
        part_of_speech,
        image_url,
        chapter_id,
        order_index,
    }
}

#[rustfmt::skip]
pub const WORDS: &[Word<'static>] = &[
    // Greetings
    word(1, "Annyeonghaseyo", "Hello (formal)", "an-nyong-ha-say-yo", "Greeting",
        Some("https://images.unsplash.com/photo-1582610116397-edb318620f90?w=300"), 1, 1),
    word(2, "Annyeong", "Hello (casual)", "an-nyong", "Greeting",
        Some("https://images.unsplash.com/photo-1591035897819-f4bdf739f446?w=300"), 1, 2),
    word(3, "Gamsahamnida", "Thank you (formal)", "gam-sa-ham-ni-da", "Expression",
        Some("https://images.unsplash.com/photo-1607827448387-a67db1383b59?w=300"), 1, 3),
    word(4, "Joesonghamnida", "Sorry (formal)", "joe-song-ham-ni-da", "Expression",
        Some("https://images.unsplash.com/photo-1579532537902-1e50099867b4?w=300"), 1, 4),
    word(5, "Ne", "Yes/Okay", "ne", "Response", None, 1, 5),
    word(6, "Aniyo", "No", "a-ni-yo", "Response", None, 1, 6),
    word(7, "Gwaenchanayo", "Its okay/Fine", "gwane-cha-na-yo", "Expression", None, 1, 7),
    word(8, "Cheoeum boepgesseumnida", "Nice to meet you", "cheo-um bwep-ges-seum-ni-da",
        "Greeting", None, 1, 8),
    word(9, "Mianhaeyo", "Sorry (casual)", "mi-an-hae-yo", "Expression", None, 1, 9),
    word(10, "Joeseoyo", "Good/Fine", "joe-se-yo", "Adjective", None, 1, 10),
    // Family
    word(11, "Gajok", "Family", "ga-jok", "Noun",
        Some("https://images.unsplash.com/photo-1511895426328-dc8714191300?w=300"), 2, 1),
    word(12, "Abeoji", "Father (formal)", "a-be-o-ji", "Noun",
        Some("https://images.unsplash.com/photo-1542909168-82c3e7fdca44?w=300"), 2, 2),
    word(13, "Appa", "Dad (casual)", "ap-pa", "Noun",
        Some("https://images.unsplash.com/photo-1542909168-82c3e7fdca44?w=300"), 2, 3),
    word(14, "Eomeoni", "Mother (formal)", "eo-me-o-ni", "Noun",
        Some("https://images.unsplash.com/photo-1571844307880-751c6d86f3f3?w=300"), 2, 4),
    word(15, "Eomma", "Mom (casual)", "eom-ma", "Noun",
        Some("https://images.unsplash.com/photo-1571844307880-751c6d86f3f3?w=300"), 2, 5),
    word(16, "Hyeong", "Older brother (male)", "hyong", "Noun",
        Some("https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=300"), 2, 6),
    word(17, "Oppa", "Older brother (female)", "op-pa", "Noun",
        Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300"), 2, 7),
    word(18, "Nuna", "Older sister (male)", "nu-na", "Noun",
        Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=300"), 2, 8),
    word(19, "Eonni", "Older sister (female)", "eon-ni", "Noun",
        Some("https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?w=300"), 2, 9),
    word(20, "Dongsaeng", "Younger sibling", "dong-saeng", "Noun",
        Some("https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=300"), 2, 10),
    // Restaurant
    word(21, "Eumsik", "Food", "eum-sik", "Noun",
        Some("https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=300"), 3, 1),
    word(22, "Mul", "Water", "mul", "Noun",
        Some("https://images.unsplash.com/photo-1548839140-29a749e1cf4d?w=300"), 3, 2),
    word(23, "Gimchi", "Kimchi", "gim-chi", "Noun",
        Some("https://images.unsplash.com/photo-1582450871972-ab5ca641643d?w=300"), 3, 3),
    word(24, "Bibimbap", "Mixed rice bowl", "bi-bim-bap", "Noun",
        Some("https://images.unsplash.com/photo-1553163147-622ab57be1c7?w=300"), 3, 4),
    word(25, "Bulgogi", "Grilled meat", "bul-go-gi", "Noun",
        Some("https://images.unsplash.com/photo-1529042410759-befb1204b468?w=300"), 3, 5),
    word(26, "Ramyeon", "Ramen noodles", "ram-yeon", "Noun",
        Some("https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=300"), 3, 6),
    word(27, "Keopi", "Coffee", "ke-o-pi", "Noun",
        Some("https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=300"), 3, 7),
    word(28, "Jyuseu", "Juice", "jyu-seu", "Noun",
        Some("https://images.unsplash.com/photo-1600271886742-f049cd451bba?w=300"), 3, 8),
    word(29, "Massisseoyo", "Delicious", "ma-siss-eo-yo", "Adjective", None, 3, 9),
    word(30, "Jumunhada", "To order", "ju-mun-ha-da", "Verb", None, 3, 10),
    // Shopping
    word(31, "Gage", "Store", "ga-ge", "Noun",
        Some("https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=300"), 4, 1),
    word(32, "Don", "Money", "don", "Noun",
        Some("https://images.unsplash.com/photo-1580519542036-c47de6196ba5?w=300"), 4, 2),
    word(33, "Bissada", "Expensive", "bis-sa-da", "Adjective", None, 4, 3),
    word(34, "Ssada", "Cheap", "ssa-da", "Adjective", None, 4, 4),
    word(35, "Eolmayeyo", "How much?", "eol-ma-ye-yo", "Question", None, 4, 5),
    word(36, "Sada", "To buy", "sa-da", "Verb", None, 4, 6),
    word(37, "Palda", "To sell", "pal-da", "Verb", None, 4, 7),
    word(38, "Ot", "Clothes", "ot", "Noun",
        Some("https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?w=300"), 4, 8),
    word(39, "Sinbal", "Shoes", "sin-bal", "Noun",
        Some("https://images.unsplash.com/photo-1460353581641-37baddab0fa2?w=300"), 4, 9),
    word(40, "Gabang", "Bag", "ga-bang", "Noun",
        Some("https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=300"), 4, 10),
];
