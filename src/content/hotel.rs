// 🏨 Grand Marina Resort - hotel construction investment pitch

use super::{
    default_nav, CallToAction, ChartPoint, ChartSpec, ContactDetail, ContactSection, FeatureCard,
    FinancialCharts, Footer, FooterColumn, FormLabels, Hero, InvestmentOffer, Material, Metric,
    ProjectCard, SectionIntro, SeriesSpec, SiteContent, Tone,
};
use crate::navigation::{NavItem, Section};

pub const SLUG: &str = "hotel";

const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/5bc1fd9a-a76b-4ddb-8adb-3c711ff006bc/files/e80cc42c-4308-4d61-a5ca-5b68b765d50a.jpg";
const INTERIOR_IMAGE: &str = "https://cdn.poehali.dev/projects/5bc1fd9a-a76b-4ddb-8adb-3c711ff006bc/files/2d4a3726-36b9-4181-860b-e9e5d8083c0e.jpg";

pub fn content() -> SiteContent {
    SiteContent {
        slug: SLUG.to_string(),
        brand: "Grand Marina Resort".to_string(),
        nav: default_nav(),
        hero: Hero {
            headline: "Инвестируйте в премиальный курортный отель".to_string(),
            lead: "5-звездочный отель на берегу моря. Старт строительства — Q1 2025. Окупаемость 6 лет"
                .to_string(),
            primary_cta: CallToAction::new("Финансовые показатели", Some("TrendingUp"), Section::Financials),
            secondary_cta: CallToAction::new("Связаться с нами", None, Section::Contact),
            stats: vec![
                Metric::new("Бюджет проекта", "850М ₽"),
                Metric::new("Номеров премиум", "120"),
                Metric::new("Окупаемость", "6 лет"),
            ],
            image_url: HERO_IMAGE.to_string(),
            image_alt: "Grand Marina Resort".to_string(),
        },
        about: SectionIntro::new(
            "О проекте",
            "Строительство премиального курортного отеля мирового уровня",
        ),
        features: vec![
            FeatureCard::new(
                "Номерной фонд",
                "120 номеров премиум-класса с видом на море",
                "Building2",
                &["От студий до люксов"],
            ),
            FeatureCard::new(
                "Инфраструктура",
                "SPA-центр, рестораны, конференц-залы, бассейн",
                "Sparkles",
                &["5 ресторанов и баров"],
            ),
            FeatureCard::new(
                "Локация",
                "Первая линия моря, курортная зона с развитой инфраструктурой",
                "MapPin",
                &["50м от пляжа"],
            ),
        ],
        portfolio: SectionIntro::new(
            "Визуализация проекта",
            "Концепт-дизайн и архитектура будущего отеля",
        ),
        projects: vec![
            ProjectCard {
                title: "Экстерьер".to_string(),
                description: "Современная архитектура в средиземноморском стиле".to_string(),
                icon: "Image".to_string(),
                image_url: Some(HERO_IMAGE.to_string()),
                metrics: vec![],
            },
            ProjectCard {
                title: "Интерьер".to_string(),
                description: "Элегантный дизайн лобби и общественных зон".to_string(),
                icon: "Image".to_string(),
                image_url: Some(INTERIOR_IMAGE.to_string()),
                metrics: vec![],
            },
        ],
        financials: SectionIntro::new(
            "Финансовые показатели",
            "График строительства и прогноз доходности",
        ),
        charts: FinancialCharts {
            line: ChartSpec {
                title: "График строительства".to_string(),
                description: "Прогресс и инвестиции (млн ₽)".to_string(),
                series: vec![
                    SeriesSpec::new("progress", "Прогресс %", Tone::Primary),
                    SeriesSpec::new("invested", "Инвестиции", Tone::Accent),
                ],
                points: vec![
                    ChartPoint::new("Q1 2025", 15.0, 85.0),
                    ChartPoint::new("Q2 2025", 35.0, 220.0),
                    ChartPoint::new("Q3 2025", 60.0, 420.0),
                    ChartPoint::new("Q4 2025", 85.0, 680.0),
                    ChartPoint::new("Q1 2026", 100.0, 850.0),
                ],
            },
            bar: ChartSpec {
                title: "Прогноз доходности".to_string(),
                description: "Выручка и загрузка (млн ₽ / %)".to_string(),
                series: vec![
                    SeriesSpec::new("revenue", "Выручка", Tone::Primary),
                    SeriesSpec::new("occupancy", "Загрузка %", Tone::Accent),
                ],
                points: vec![
                    ChartPoint::new("2026", 180.0, 55.0),
                    ChartPoint::new("2027", 340.0, 72.0),
                    ChartPoint::new("2028", 480.0, 85.0),
                    ChartPoint::new("2029", 560.0, 88.0),
                    ChartPoint::new("2030", 620.0, 90.0),
                ],
            },
        },
        offer: InvestmentOffer {
            title: "Инвестиционное предложение".to_string(),
            subtitle: "Привлечение инвестиций на строительство".to_string(),
            terms: vec![
                Metric::new("Объем привлечения", "350 млн ₽"),
                Metric::new("Ожидаемая доходность", "18-22% годовых"),
                Metric::new("Минимальный вход", "от 10 млн ₽"),
            ],
            note: "Инвестиции будут направлены на завершение строительства, оснащение отеля и маркетинговую кампанию. Окупаемость проекта 6 лет"
                .to_string(),
            cta_label: "Обсудить инвестиции".to_string(),
        },
        presentation: SectionIntro::new(
            "Материалы для инвесторов",
            "Скачайте подробную информацию о компании и финансовые отчеты",
        ),
        materials: vec![
            Material::new(
                "Презентация компании",
                "Подробная информация о бизнесе, команде и стратегии развития",
                "FileText",
                "Скачать PDF (2.4 МБ)",
            ),
            Material::new(
                "Финансовая отчетность",
                "Полная финансовая отчетность за последние 4 года с аудитом",
                "BarChart3",
                "Скачать PDF (1.8 МБ)",
            ),
            Material::new(
                "Инвестиционный меморандум",
                "Детальная информация об инвестиционном раунде и условиях",
                "TrendingUp",
                "Скачать PDF (3.1 МБ)",
            ),
        ],
        contact: ContactSection {
            intro: SectionIntro::new(
                "Свяжитесь с нами",
                "Готовы обсудить партнерство или инвестиции? Напишите нам",
            ),
            info_title: "Контактная информация".to_string(),
            details: vec![
                ContactDetail::new("MapPin", "Адрес офиса", "г. Москва, ул. Тверская, д. 12, офис 500"),
                ContactDetail::new("Phone", "Телефон", "+7 (495) 123-45-67"),
                ContactDetail::new("Mail", "Email", "invest@investtech.ru"),
                ContactDetail::new("Clock", "Режим работы", "Пн-Пт: 9:00 - 18:00"),
            ],
            form_title: "Форма обратной связи".to_string(),
            labels: russian_form_labels(),
            acknowledgement: "Спасибо! Мы свяжемся с вами в ближайшее время.".to_string(),
        },
        footer: Footer {
            tagline: "Премиальный курортный отель 5 звезд".to_string(),
            columns: vec![
                FooterColumn {
                    title: "Проект".to_string(),
                    links: vec![
                        NavItem::new("about", "О проекте"),
                        NavItem::new("portfolio", "Визуализация"),
                        NavItem::new("contact", "Контакты"),
                    ],
                },
                FooterColumn {
                    title: "Для инвесторов".to_string(),
                    links: vec![
                        NavItem::new("financials", "Финансы"),
                        NavItem::new("presentation", "Презентация"),
                        NavItem::new("presentation", "Отчетность"),
                    ],
                },
            ],
            social: vec!["Linkedin".to_string(), "Twitter".to_string(), "Facebook".to_string()],
            copyright: "© 2024 Grand Marina Resort. Все права защищены.".to_string(),
        },
    }
}

pub(crate) fn russian_form_labels() -> FormLabels {
    FormLabels {
        name: "Ваше имя".to_string(),
        email: "Email".to_string(),
        message: "Ваше сообщение".to_string(),
        submit: "Отправить сообщение".to_string(),
        required: "Заполните это поле".to_string(),
    }
}
