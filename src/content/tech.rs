// 💻 InvestTech - technology company investor relations pitch
//
// Same template as the hotel site; only copy and figures differ.

use super::hotel::russian_form_labels;
use super::{
    default_nav, CallToAction, ChartPoint, ChartSpec, ContactDetail, ContactSection, FeatureCard,
    FinancialCharts, Footer, FooterColumn, Hero, InvestmentOffer, Material, Metric, ProjectCard,
    SectionIntro, SeriesSpec, SiteContent, Tone,
};
use crate::navigation::{NavItem, Section};

pub const SLUG: &str = "tech";

const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/investtech/files/office-hero.jpg";

pub fn content() -> SiteContent {
    SiteContent {
        slug: SLUG.to_string(),
        brand: "InvestTech".to_string(),
        nav: default_nav(),
        hero: Hero {
            headline: "Инвестируйте в технологии будущего".to_string(),
            lead: "Облачная платформа для автоматизации бизнеса. 12 000 клиентов и рост выручки 60% в год"
                .to_string(),
            primary_cta: CallToAction::new("Финансовые показатели", Some("TrendingUp"), Section::Financials),
            secondary_cta: CallToAction::new("Связаться с нами", None, Section::Contact),
            stats: vec![
                Metric::new("Выручка 2024", "1.2 млрд ₽"),
                Metric::new("Клиентов", "12 000"),
                Metric::new("Рост в год", "60%"),
            ],
            image_url: HERO_IMAGE.to_string(),
            image_alt: "InvestTech".to_string(),
        },
        about: SectionIntro::new(
            "О компании",
            "Разрабатываем программные продукты для среднего и крупного бизнеса с 2015 года",
        ),
        features: vec![
            FeatureCard::new(
                "Команда",
                "Более 300 инженеров и аналитиков в трех офисах",
                "Users",
                &["85% — разработчики"],
            ),
            FeatureCard::new(
                "Технологии",
                "Собственная облачная платформа и машинное обучение",
                "Cpu",
                &["14 патентов", "ISO 27001"],
            ),
            FeatureCard::new(
                "Рынок",
                "Клиенты в 9 странах СНГ и Восточной Европы",
                "Globe",
                &["Доля рынка 18%"],
            ),
        ],
        portfolio: SectionIntro::new(
            "Портфель продуктов",
            "Ключевые продукты и их вклад в выручку компании",
        ),
        projects: vec![
            ProjectCard {
                title: "CloudDesk".to_string(),
                description: "Платформа управления бизнес-процессами".to_string(),
                icon: "Cloud".to_string(),
                image_url: None,
                metrics: vec![
                    Metric::new("Клиентов", "8 400"),
                    Metric::new("Доля выручки", "54%"),
                ],
            },
            ProjectCard {
                title: "DataPulse".to_string(),
                description: "Аналитика и прогнозирование на основе ИИ".to_string(),
                icon: "Activity".to_string(),
                image_url: None,
                metrics: vec![
                    Metric::new("Клиентов", "2 900"),
                    Metric::new("Рост за год", "x2.3"),
                ],
            },
            ProjectCard {
                title: "SecureGate".to_string(),
                description: "Защита корпоративной инфраструктуры".to_string(),
                icon: "Shield".to_string(),
                image_url: None,
                metrics: vec![Metric::new("Клиентов", "700")],
            },
        ],
        financials: SectionIntro::new(
            "Финансовые показатели",
            "Динамика выручки и прибыли, структура доходов",
        ),
        charts: FinancialCharts {
            line: ChartSpec {
                title: "Выручка и прибыль".to_string(),
                description: "Млн ₽ по годам".to_string(),
                series: vec![
                    SeriesSpec::new("revenue", "Выручка", Tone::Primary),
                    SeriesSpec::new("profit", "Чистая прибыль", Tone::Accent),
                ],
                points: vec![
                    ChartPoint::new("2020", 210.0, 18.0),
                    ChartPoint::new("2021", 340.0, 41.0),
                    ChartPoint::new("2022", 520.0, 77.0),
                    ChartPoint::new("2023", 790.0, 132.0),
                    ChartPoint::new("2024", 1200.0, 214.0),
                ],
            },
            bar: ChartSpec {
                title: "Структура выручки".to_string(),
                description: "Подписки и услуги (млн ₽)".to_string(),
                series: vec![
                    SeriesSpec::new("subscriptions", "Подписки", Tone::Primary),
                    SeriesSpec::new("services", "Услуги", Tone::Accent),
                ],
                points: vec![
                    ChartPoint::new("Q1 2024", 190.0, 62.0),
                    ChartPoint::new("Q2 2024", 221.0, 70.0),
                    ChartPoint::new("Q3 2024", 248.0, 74.0),
                    ChartPoint::new("Q4 2024", 296.0, 89.0),
                ],
            },
        },
        offer: InvestmentOffer {
            title: "Инвестиционный раунд".to_string(),
            subtitle: "Pre-IPO раунд для расширения на новые рынки".to_string(),
            terms: vec![
                Metric::new("Объем раунда", "1.5 млрд ₽"),
                Metric::new("Оценка компании", "12 млрд ₽"),
                Metric::new("Минимальный вход", "от 25 млн ₽"),
            ],
            note: "Средства будут направлены на выход на рынки Восточной Европы, развитие ИИ-продуктов и подготовку к IPO в 2027 году"
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
                "Продукты, команда и стратегия развития до 2028 года",
                "FileText",
                "Скачать PDF (3.2 МБ)",
            ),
            Material::new(
                "Финансовая отчетность",
                "Отчетность по МСФО за 2021-2024 годы с аудиторским заключением",
                "BarChart3",
                "Скачать PDF (2.1 МБ)",
            ),
            Material::new(
                "Инвестиционный меморандум",
                "Условия раунда, структура сделки и план выхода",
                "TrendingUp",
                "Скачать PDF (1.4 МБ)",
            ),
        ],
        contact: ContactSection {
            intro: SectionIntro::new(
                "Свяжитесь с нами",
                "Готовы обсудить партнерство или инвестиции? Напишите нам",
            ),
            info_title: "Отдел по работе с инвесторами".to_string(),
            details: vec![
                ContactDetail::new("MapPin", "Адрес офиса", "г. Москва, Пресненская наб., д. 10, БЦ «Башня на Набережной»"),
                ContactDetail::new("Phone", "Телефон", "+7 (495) 987-65-43"),
                ContactDetail::new("Mail", "Email", "ir@investtech.ru"),
                ContactDetail::new("Clock", "Режим работы", "Пн-Пт: 10:00 - 19:00"),
            ],
            form_title: "Форма обратной связи".to_string(),
            labels: russian_form_labels(),
            acknowledgement: "Спасибо за интерес к InvestTech! Отдел по работе с инвесторами ответит вам в течение рабочего дня."
                .to_string(),
        },
        footer: Footer {
            tagline: "Облачные решения для бизнеса".to_string(),
            columns: vec![
                FooterColumn {
                    title: "Компания".to_string(),
                    links: vec![
                        NavItem::new("about", "О компании"),
                        NavItem::new("portfolio", "Продукты"),
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
            social: vec!["Linkedin".to_string(), "Twitter".to_string(), "Github".to_string()],
            copyright: "© 2024 InvestTech. Все права защищены.".to_string(),
        },
    }
}
