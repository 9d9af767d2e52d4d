use shared::wheel_session::MessageKind;

pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const FLEX_CENTER: &str = "flex min-h-[80vh] flex-col justify-center px-6 py-12 lg:px-8";
pub const FORM: &str = "mt-4 space-y-4";
pub const FORM_CARD: &str = "bg-white dark:bg-gray-900 rounded-xl shadow-xl p-8 max-w-md w-full mx-auto border border-gray-200/50 dark:border-gray-700/50";
pub const WHEEL_CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl max-w-2xl mx-auto border border-gray-100 dark:border-gray-700";
pub const HEADER: &str = "mb-6 text-center";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const SUBMIT_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 rounded-lg transition-all duration-200";
pub const SPIN_BUTTON: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";
pub const BACK_LINK: &str = "text-sm text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 cursor-pointer transition-colors duration-200";
pub const BACK_LINK_DISABLED: &str = "text-sm text-gray-400 cursor-not-allowed";

const MESSAGE_BASE: &str = "p-3 rounded-lg text-center";
const MESSAGE_SUCCESS: &str = "text-green-500 bg-green-50 dark:bg-green-900/20";
const MESSAGE_ERROR: &str = "text-red-500 bg-red-50 dark:bg-red-900/20";
const MESSAGE_DEFAULT: &str = "text-gray-600 dark:text-gray-300";

pub fn message_class(kind: MessageKind) -> String {
    let tone = match kind {
        MessageKind::Success => MESSAGE_SUCCESS,
        MessageKind::Error => MESSAGE_ERROR,
        MessageKind::Default => MESSAGE_DEFAULT,
    };
    format!("{} {}", MESSAGE_BASE, tone)
}
