use crate::shapes::{enums::LanguageEnum, settings::current_settings};

#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub team_a: &'static str,
    pub team_b: &'static str,
    pub sets: &'static str,
    pub serving: &'static str,
    pub score_timeline: &'static str,
    pub current_set: &'static str,
    pub set: &'static str,
    pub points: &'static str,
    pub side: &'static str,
    pub score: &'static str,
    pub time: &'static str,
    pub no_points_yet: &'static str,
    pub set_won_by: &'static str,
    pub match_reset: &'static str,
    pub score_point_a: &'static str,
    pub score_point_b: &'static str,
    pub reset: &'static str,
    pub previous_set: &'static str,
    pub next_set: &'static str,
    pub help: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub action: &'static str,
    pub keys: &'static str,
    pub keybindings: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub settings_fallback: &'static str,
    pub could_not_recognize_home_directory: &'static str,
    pub could_not_create_app_directory: &'static str,
}

pub static EN_LABELS: Labels = Labels {
    app_title: "🏓 pongboard",
    team_a: "blue team",
    team_b: "red team",
    sets: "sets",
    serving: "serving",
    score_timeline: "score timeline",
    current_set: "current set",
    set: "set",
    points: "points",
    side: "side",
    score: "score",
    time: "time",
    no_points_yet: "no points yet",
    set_won_by: "set won by {}",
    match_reset: "match reset",
    score_point_a: "point blue",
    score_point_b: "point red",
    reset: "reset",
    previous_set: "previous set",
    next_set: "next set",
    help: "help",
    back: "back",
    quit: "quit",
    action: "action",
    keys: "keys",
    keybindings: "key bindings",
    info: "info",
    warning: "warning",
    settings_fallback: "could not load settings, defaults are in use",
    could_not_recognize_home_directory: "could not recognize home directory",
    could_not_create_app_directory: "could not create app directory",
};

pub static KO_LABELS: Labels = Labels {
    app_title: "🏓 탁구 경기 스코어보드",
    team_a: "청팀",
    team_b: "홍팀",
    sets: "세트 스코어",
    serving: "서브",
    score_timeline: "점수 타임라인",
    current_set: "현재 세트",
    set: "세트",
    points: "점",
    side: "팀",
    score: "점수",
    time: "시간",
    no_points_yet: "아직 점수가 없습니다",
    set_won_by: "{} 세트 승리",
    match_reset: "경기 초기화",
    score_point_a: "청팀 득점",
    score_point_b: "홍팀 득점",
    reset: "리셋",
    previous_set: "이전 세트",
    next_set: "다음 세트",
    help: "도움말",
    back: "뒤로",
    quit: "종료",
    action: "동작",
    keys: "키",
    keybindings: "키 설정",
    info: "정보",
    warning: "경고",
    settings_fallback: "설정을 불러올 수 없어 기본값을 사용합니다",
    could_not_recognize_home_directory: "홈 디렉터리를 찾을 수 없습니다",
    could_not_create_app_directory: "앱 디렉터리를 만들 수 없습니다",
};

pub fn labels_for(language: LanguageEnum) -> &'static Labels {
    match language {
        LanguageEnum::En => &EN_LABELS,
        LanguageEnum::Ko => &KO_LABELS,
    }
}

/// Returns the labels for the language in the current settings.
pub fn current_labels() -> &'static Labels {
    labels_for(current_settings().language)
}
