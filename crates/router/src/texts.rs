//! Reply copy for every intent, plus button labels and the bot profile
//! description. Ukrainian storefront wording; kept in one place so the
//! control flow in the classifier and composer stays language-neutral.

/// Caption sent with the intro animation on `/start`.
pub const WELCOME_CAPTION: &str = "🎉 Ласкаво просимо до нашого магазину!

🌟 Вітаємо вас у нашому магазині — місці, де зручність і вигода завжди поруч!

Ми раді, що ви завітали до нас. Тут ви знайдете великий вибір продукції за привабливими цінами, а також швидкий сервіс і надійну підтримку.

🛍️ <b>Щоб відкрити магазин</b>, просто натисніть кнопку \"Магазин\" нижче. Він відкриється у зручному міні-додатку прямо в Telegram!

🔹 Для вашої зручності ми додали меню, яке відкривається у нижньому кутку чату. Завдяки цьому ви з легкістю знайдете інформацію про оплату, доставку та гарантії.

🔹 Якщо у вас є питання або потрібна допомога у виборі — пишіть нам у Instagram! Посилання на нашу сторінку є в меню.

💬 Ми завжди готові допомогти вам знайти саме те, що вам потрібно!

Дякуємо за ваш вибір та бажаємо приємних покупок! 💛";

/// Short instruction sent for the `/shop` command.
pub const SHOP_PROMPT: &str =
    "🛍️ Натисніть кнопку нижче, щоб відкрити магазин у міні-додатку:";

/// Heading for the `/menu` reply.
pub const MENU_HEADING: &str = "🏪 <b>Головне меню</b>\n\nОберіть опцію:";

/// Reply when free text mentions the shop.
pub const KEYWORD_REPLY: &str =
    "🛍️ Ось посилання на наш магазин. Натисніть кнопку, щоб відкрити його у міні-додатку:";

/// Reply for any other message.
pub const FALLBACK_PROMPT: &str =
    "🔍 Щоб переглянути наш асортимент, натисніть кнопку нижче:";

/// Bot profile description, also sent for the "about" callback.
pub const ABOUT_TEXT: &str = "Ласкаво просимо до нашого магазину, де ви знайдете тільки найкращу техніку Apple — нову та б/у за вигідними цінами! 😊

Відчуйте якість Apple з нашим асортиментом нових та сертифікованих пристроїв! 🍏

Шукаєте надійну техніку Apple? У нас є нові моделі та перевірені пристрої, що задовольнять навіть найвибагливих покупців! 📱

Обирайте нові та сертифіковані продукти Apple — якість і інновації за доступною ціною тільки в нашому магазині! 💻";

pub const OPEN_SHOP_BUTTON: &str = "🛍️ Відкрити магазин";
pub const SHOP_BUTTON: &str = "🛍️ Магазин";
pub const SUPPORT_BUTTON: &str = "📞 Підтримка";
pub const ABOUT_BUTTON: &str = "ℹ️ Про нас";

/// Callback identifier carried by the "about" menu button.
pub const ABOUT_CALLBACK: &str = "about";
