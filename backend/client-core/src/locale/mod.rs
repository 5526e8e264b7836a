//! Vietnamese and English string tables for every piece of visible text.
//!
//! Lookups are static: pick a table with [`strings`] and read fields off it.

use models::{ModelTier, TargetLanguage, UiLanguage};

#[derive(Debug)]
pub struct NavStrings {
    pub brand: &'static str,
    pub features: &'static str,
    pub pricing: &'static str,
    pub docs: &'static str,
    pub contact: &'static str,
    /// Label of the switch, i.e. the language it switches *to*.
    pub switch_label: &'static str,
}

#[derive(Debug)]
pub struct HeroStrings {
    pub greeting: &'static str,
    pub name: &'static str,
    pub question: &'static str,
    pub placeholder: &'static str,
    pub standard: &'static str,
    pub advanced: &'static str,
    pub target_label: &'static str,
    pub attachment_label: &'static str,
}

#[derive(Debug)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct MessageStrings {
    pub translating: &'static str,
    pub result_heading: &'static str,
    pub quality_label: &'static str,
    pub provider_label: &'static str,
    pub translation_failed: &'static str,
    pub truncation_warning: &'static str,
    pub coming_soon: &'static str,
    pub unsupported_file_type: &'static str,
    pub file_too_large: &'static str,
    pub unreadable_file: &'static str,
    pub empty_input: &'static str,
}

#[derive(Debug)]
pub struct Strings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub services: [ServiceCard; 4],
    pub messages: MessageStrings,
}

impl Strings {
    pub fn model_tier(&self, tier: ModelTier) -> &'static str {
        match tier {
            ModelTier::Standard => self.hero.standard,
            ModelTier::Advanced => self.hero.advanced,
        }
    }
}

pub fn strings(language: UiLanguage) -> &'static Strings {
    match language {
        UiLanguage::Vietnamese => &VI,
        UiLanguage::English => &EN,
    }
}

/// Display name of a target language in the current UI language.
pub fn language_name(ui: UiLanguage, target: TargetLanguage) -> &'static str {
    match (ui, target) {
        (UiLanguage::Vietnamese, TargetLanguage::Vietnamese) => "Tiếng Việt",
        (UiLanguage::Vietnamese, TargetLanguage::English) => "Tiếng Anh",
        (UiLanguage::Vietnamese, TargetLanguage::Chinese) => "Tiếng Trung",
        (UiLanguage::Vietnamese, TargetLanguage::Japanese) => "Tiếng Nhật",
        (UiLanguage::Vietnamese, TargetLanguage::Korean) => "Tiếng Hàn",
        (UiLanguage::Vietnamese, TargetLanguage::French) => "Tiếng Pháp",
        (UiLanguage::Vietnamese, TargetLanguage::German) => "Tiếng Đức",
        (UiLanguage::Vietnamese, TargetLanguage::Spanish) => "Tiếng Tây Ban Nha",
        (UiLanguage::Vietnamese, TargetLanguage::Thai) => "Tiếng Thái",
        (UiLanguage::English, TargetLanguage::Vietnamese) => "Vietnamese",
        (UiLanguage::English, TargetLanguage::English) => "English",
        (UiLanguage::English, TargetLanguage::Chinese) => "Chinese",
        (UiLanguage::English, TargetLanguage::Japanese) => "Japanese",
        (UiLanguage::English, TargetLanguage::Korean) => "Korean",
        (UiLanguage::English, TargetLanguage::French) => "French",
        (UiLanguage::English, TargetLanguage::German) => "German",
        (UiLanguage::English, TargetLanguage::Spanish) => "Spanish",
        (UiLanguage::English, TargetLanguage::Thai) => "Thai",
    }
}

static VI: Strings = Strings {
    nav: NavStrings {
        brand: "PRISM",
        features: "Tính năng",
        pricing: "Bảng giá",
        docs: "Tài liệu",
        contact: "Liên hệ",
        switch_label: "EN",
    },
    hero: HeroStrings {
        greeting: "Xin chào",
        name: "Lâm Nguyễn",
        question: "Bạn cần chuyển đổi tài liệu gì hôm nay?",
        placeholder: "Upload file hoặc paste nội dung để bắt đầu...",
        standard: "Tiêu chuẩn",
        advanced: "Nâng cao",
        target_label: "Dịch sang",
        attachment_label: "Tệp đính kèm",
    },
    services: [
        ServiceCard {
            title: "Dịch đa ngôn ngữ",
            description: "Dịch tài liệu sang 100+ ngôn ngữ với AI",
        },
        ServiceCard {
            title: "Tạo podcast",
            description: "Chuyển văn bản thành kịch bản podcast chuyên nghiệp",
        },
        ServiceCard {
            title: "Video script",
            description: "Tạo kịch bản video training từ tài liệu",
        },
        ServiceCard {
            title: "Khóa học online",
            description: "Xây dựng module học tập từ nội dung của bạn",
        },
    ],
    messages: MessageStrings {
        translating: "Đang dịch...",
        result_heading: "Bản dịch",
        quality_label: "Chất lượng",
        provider_label: "Nhà cung cấp",
        translation_failed: "Dịch thất bại. Vui lòng thử lại.",
        truncation_warning: "Nội dung quá dài, chỉ 3.000 ký tự đầu tiên được dịch.",
        coming_soon: "Hỗ trợ PDF và DOCX sắp ra mắt. Hiện chỉ hỗ trợ tệp .txt.",
        unsupported_file_type: "Định dạng tệp không được hỗ trợ. Chấp nhận .txt, .pdf, .docx.",
        file_too_large: "Tệp quá lớn. Kích thước tối đa là 10 MB.",
        unreadable_file: "Không thể đọc tệp.",
        empty_input: "Vui lòng nhập nội dung hoặc đính kèm tệp.",
    },
};

static EN: Strings = Strings {
    nav: NavStrings {
        brand: "PRISM",
        features: "Features",
        pricing: "Pricing",
        docs: "Documentation",
        contact: "Contact",
        switch_label: "VI",
    },
    hero: HeroStrings {
        greeting: "Hello",
        name: "Lâm Nguyễn",
        question: "What document do you need to transform today?",
        placeholder: "Upload file or paste content to get started...",
        standard: "Standard",
        advanced: "Advanced",
        target_label: "Translate to",
        attachment_label: "Attachment",
    },
    services: [
        ServiceCard {
            title: "Multi-language Translation",
            description: "Translate documents to 100+ languages with AI",
        },
        ServiceCard {
            title: "Create Podcast",
            description: "Transform text into professional podcast scripts",
        },
        ServiceCard {
            title: "Video Script",
            description: "Generate video training scripts from documents",
        },
        ServiceCard {
            title: "Online Course",
            description: "Build learning modules from your content",
        },
    ],
    messages: MessageStrings {
        translating: "Translating...",
        result_heading: "Translation",
        quality_label: "Quality",
        provider_label: "Provider",
        translation_failed: "Translation failed. Please try again.",
        truncation_warning: "Content is too long; only the first 3,000 characters were translated.",
        coming_soon: "PDF and DOCX support is coming soon. Only .txt files are supported for now.",
        unsupported_file_type: "Unsupported file type. Accepted: .txt, .pdf, .docx.",
        file_too_large: "File is too large. Maximum size is 10 MB.",
        unreadable_file: "The file could not be read.",
        empty_input: "Enter some text or attach a file.",
    },
};
