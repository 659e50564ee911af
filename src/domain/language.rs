use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display language. Urdu is laid out right-to-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ur,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ur
    }

    /// Looks `key` up in the translation table, falling back to the key itself.
    pub fn translate(self, key: &str) -> &str {
        TRANSLATIONS
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, en, ur)| match self {
                Language::En => *en,
                Language::Ur => *ur,
            })
            .filter(|text| !text.is_empty())
            .unwrap_or(key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ur" => Ok(Language::Ur),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// (key, English, Urdu)
static TRANSLATIONS: &[(&str, &str, &str)] = &[
    // Navigation
    ("home", "Home", "گھر"),
    ("search", "Search", "تلاش"),
    ("cart", "Shopping Cart", "خریداری کی ٹوکری"),
    ("profile", "Profile", "پروفائل"),
    // Common
    ("next", "Next", "اگلا"),
    ("back", "Back", "واپس"),
    ("save", "Save", "محفوظ کریں"),
    ("continue", "Continue", "جاری رکھیں"),
    // Sign Up
    ("nameQuestion", "What's your name?", "آپ کا نام؟"),
    ("phoneQuestion", "Phone number?", "فون نمبر؟"),
    ("addressQuestion", "Delivery location?", "پتہ کہاں ہے؟"),
    ("enterName", "Enter your name", "نام لکھیں"),
    ("enterPhone", "03XX XXXXXXX", "03XX XXXXXXX"),
    ("selected", "Selected:", "منتخب:"),
    ("startShopping", "Start Shopping", "خریداری شروع کریں"),
    // Home
    ("hello", "Hello", "السلام علیکم"),
    ("whatNeed", "What do you need?", "کیا چاہیے؟"),
    ("searchPlaceholder", "Search...", "تلاش کریں..."),
    ("voiceSearch", "Voice Search", "آواز سے تلاش"),
    ("shopByCategory", "Shop by Category", "قسم سے خریدیں"),
    ("seeAll", "See All", "سب دیکھیں"),
    ("popularItems", "Popular Items", "مشہور چیزیں"),
    ("weekendSpecial", "Weekend Special", "ہفتہ کی خاص پیشکش"),
    ("discountText", "Get up to 30% OFF on fresh vegetables", "تازہ سبزیوں پر 30% چھوٹ"),
    ("shopNow", "Shop Now", "ابھی خریدیں"),
    ("outOfStock", "Out of Stock", "ختم"),
    ("addedToCart", "added to cart", "ٹوکری میں شامل"),
    // Categories
    ("vegetables", "Vegetables", "سبزیاں"),
    ("dairy", "Dairy", "دودھ کی مصنوعات"),
    ("bakery", "Bakery", "بیکری"),
    ("meat", "Meat", "گوشت"),
    ("snacks", "Snacks", "نمکین"),
    ("beverages", "Beverages", "مشروبات"),
    ("household", "Household Items", "گھر کا سامان"),
    ("personalCare", "Personal Care", "ذاتی نگہداشت"),
    // Profile
    ("profileTitle", "Profile", "پروفائل"),
    ("editInfo", "Edit Info", "معلومات بدلیں"),
    ("updateDetails", "Update details", "تفصیلات"),
    ("settings", "Settings", "ترتیبات"),
    ("customizeApp", "Customize app", "ایپ کو بدلیں"),
    ("favorites", "Favorites", "پسندیدہ"),
    ("savedItems", "Saved items", "محفوظ چیزیں"),
    ("help", "Help", "مدد"),
    ("support", "Support", "سپورٹ"),
    ("addresses", "Addresses", "پتے"),
    ("deliveryLocations", "Delivery locations", "ترسیل کے پتے"),
    ("payment", "Payment", "ادائیگی"),
    ("paymentOptions", "Payment options", "ادائیگی کے طریقے"),
    ("voiceHelp", "Voice Help", "آواز سے مدد"),
    ("tapToStart", "Tap to start", "شروع کریں"),
    // Settings
    ("settingsTitle", "Settings", "ترتیبات"),
    ("textSize", "Text Size", "حروف کا سائز"),
    ("darkMode", "Dark Mode", "گہرا موڈ"),
    ("voice", "Voice", "آواز"),
    ("colorVision", "Color Vision", "رنگ"),
    ("vibration", "Vibration", "کمپن"),
    ("sound", "Sound", "آواز"),
    ("guidedMode", "Guided Mode", "رہنمائی موڈ"),
    ("stepByStep", "Step by step", "آہستہ آہستہ"),
    ("language", "Language", "زبان"),
    // Cart
    ("emptyCart", "Your cart is empty", "آپ کی ٹوکری خالی ہے"),
    ("deliveryTime", "Delivery Time", "ڈیلیوری کا وقت"),
    ("change", "Change", "تبدیل کریں"),
    ("removedFromCart", "removed from cart", "ٹوکری سے ہٹا دیا"),
    ("maxStock", "Max stock reached", "زیادہ سے زیادہ اسٹاک"),
    ("vouchers", "Apply Voucher", "واؤچر لگائیں"),
    ("code", "Code", "کوڈ"),
    ("details", "Details", "تفصیلات"),
    ("applied", "Applied", "لگا دیا"),
    ("apply", "Apply", "لگائیں"),
    ("subtotal", "Subtotal", "ذیلی کل"),
    ("deliveryFee", "Delivery Fee", "ڈیلیوری فیس"),
    ("total", "Total", "کل"),
    ("checkout", "Proceed to Checkout", "چیک آؤٹ کی طرف بڑھیں"),
    ("proceedingCheckout", "Proceeding to checkout", "چیک آؤٹ کی طرف بڑھ رہے ہیں"),
    // Checkout
    ("deliveryAddress", "Delivery Address", "ڈیلیوری کا پتہ"),
    ("tapToChange", "Tap to change", "تبدیل کرنے کے لیے ٹیپ کریں"),
    ("paymentMethod", "Payment Method", "ادائیگی کا طریقہ"),
    ("creditDebitCard", "Credit/Debit Card", "کریڈٹ/ڈیبٹ کارڈ"),
    ("cashOnDelivery", "Cash on Delivery", "ڈیلیوری پر نقد"),
    ("orderSummary", "Order Summary", "آرڈر کا خلاصہ"),
    ("discount", "Discount", "رعایت"),
    ("placeOrder", "Place Order", "آرڈر دیں"),
    ("continueShopping", "Continue Shopping", "خریداری جاری رکھیں"),
    ("selectAddress", "Select Address", "پتہ منتخب کریں"),
    ("dragPinToLocation", "Drag the pin to your location", "پن کو اپنے مقام پر گھسیٹیں"),
    ("savedAddresses", "Saved Addresses", "محفوظ شدہ پتے"),
    ("confirmAddress", "Confirm Address", "پتہ تصدیق کریں"),
    ("editPayment", "Edit Payment", "ادائیگی میں ترمیم"),
    ("cardNumber", "Card Number", "کارڈ نمبر"),
    ("cardholderName", "Cardholder Name", "کارڈ ہولڈر کا نام"),
    ("expiry", "Expiry", "میعاد ختم"),
    ("mobileNumber", "Mobile Number", "موبائل نمبر"),
    ("mpin", "MPIN", "ایم پن"),
    ("paymentUpdated", "Payment details updated!", "ادائیگی کی تفصیلات اپ ڈیٹ!"),
    // Voice
    ("voiceActivated", "Voice search activated", "آواز سے تلاش شروع"),
    ("speakProduct", "Please say the product", "چیز کا نام بولیں"),
    ("listening", "Listening...", "سن رہے ہیں..."),
    ("searching", "Searching for", "تلاش کر رہے ہیں"),
    ("voiceNotSupported", "Voice search not supported", "آواز کی تلاش دستیاب نہیں"),
    ("voiceError", "Please try again", "دوبارہ کوشش کریں"),
    ("price", "Price", "قیمت"),
    // Guided Mode
    ("guidedConfirm", "Do you want to add this?", "کیا آپ یہ شامل کرنا چاہتے ہیں؟"),
    ("yes", "Yes", "ہاں"),
    ("no", "No", "نہیں"),
    // Additional
    ("manageAddresses", "Manage", "نظمیت کریں"),
    ("addAnotherAddress", "+ Add Another Address", "+ نیا پتہ شامل کریں"),
    ("noFavorites", "No favorites yet", "ابھی کوئی پسندیدہ نہیں"),
    ("addToCart", "Add to Cart", "ٹوکری میں شامل کریں"),
    ("commonQuestions", "Common Questions", "عام سوالات"),
    ("typeYourQuestion", "Type your question...", "اپنا سوال لکھیں..."),
    ("querySent", "Query sent!", "سوال بھیج دیا!"),
    ("confirmDelete", "Are you sure?", "کیا آپ واقعی چاہتے ہیں؟"),
    ("fillAllFields", "Please fill all fields", "تمام خانے بھریں"),
    ("saved", "saved", "محفوظ"),
    ("default", "Default", "طے شدہ"),
    ("addNewAddress", "Add New Address", "نیا پتہ شامل کریں"),
    ("label", "Label", "لیبل"),
    ("office", "Office", "دفتر"),
    ("cancel", "Cancel", "منسوخ کریں"),
    ("add", "Add", "شامل کریں"),
    // Categories
    ("categories", "categories", "اقسام"),
    ("needHelp", "Need help finding something?", "کچھ تلاش کرنے میں مدد چاہیے؟"),
    ("tryVoiceSearch", "Try voice search or browse categories", "آواز سے تلاش یا اقسام دیکھیں"),
    // Orders
    ("myOrders", "My Orders", "میرے آرڈرز"),
    ("orders", "orders", "آرڈرز"),
    ("items", "items", "اشیاء"),
    ("status", "Status", "حالت"),
    ("findingRider", "Finding Rider", "رائیڈر تلاش"),
    ("preparing", "Preparing", "تیاری جاری"),
    ("pickedUp", "Picked Up", "اٹھایا گیا"),
    ("delivered", "Delivered", "ڈیلیور ہوگیا"),
    ("noOrders", "No orders yet", "ابھی تک کوئی آرڈر نہیں"),
    ("trackOrder", "Track Order", "آرڈر ٹریک کریں"),
    ("estimatedTime", "Estimated time", "تخمینی وقت"),
    ("orderProgress", "Order Progress", "آرڈر کی پیش رفت"),
    ("riderInfo", "Rider Information", "رائیڈر کی معلومات"),
    ("orderItems", "Order Items", "آرڈر کی اشیاء"),
    ("qty", "Qty", "مقدار"),
    ("orderAgain", "Order Again", "دوبارہ آرڈر کریں"),
    // Product Detail
    ("reviews", "reviews", "جائزے"),
    ("inStock", "In Stock", "دستیاب"),
    ("description", "Description", "تفصیل"),
    ("nutritionInfo", "Nutrition Information", "غذائی معلومات"),
    ("calories", "Calories", "کیلوریز"),
    ("protein", "Protein", "پروٹین"),
    ("fat", "Fat", "چربی"),
    ("carbs", "Carbs", "کاربوہائیڈریٹ"),
    // Tutorial
    ("skip", "Skip", "چھوڑیں"),
    ("getStarted", "Get Started", "شروع کریں"),
    // Announcements
    ("orderPlaced", "Order placed", "آرڈر ہو گیا"),
    ("addedToFavorites", "Added to favorites", "پسندیدہ میں شامل"),
    ("removedFromFavorites", "Removed from favorites", "پسندیدہ سے ہٹا دیا"),
    ("addressAdded", "Address added", "پتہ شامل ہو گیا"),
    ("addressUpdated", "Address updated", "پتہ اپ ڈیٹ ہو گیا"),
    ("addressDeleted", "Address deleted", "پتہ حذف ہو گیا"),
];
