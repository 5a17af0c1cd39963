//! Advice lines shown with the final fate, one pool per tier.

pub const GOOD: [&str; 20] = [
    "幸運の波があなたに向かっています。",
    "自信を持って進める最高のタイミングです。",
    "直感が冴えて成功につながります。",
    "行動するほどチャンスが増えます。",
    "強いエネルギーが味方しています。",
    "願いが現実に近づく日です。",
    "魅力が最大限に発揮されます。",
    "大きな前進が期待できます。",
    "思い切った決断が成功します。",
    "あなたの輝きが周囲を動かします。",
    "夢に向かう力が高まっています。",
    "努力の成果が見え始めます。",
    "積極的な行動が最良の結果を生みます。",
    "あなたの才能が花開く瞬間です。",
    "新しいチャンスがやってきます。",
    "運命があなたの味方です。",
    "自分の力を信じるべき日です。",
    "あなたの選択が未来を強く照らします。",
    "幸せの扉が開こうとしています。",
    "思い描いた未来が現実になります。",
];

pub const MEDIUM: [&str; 20] = [
    "今日は安定した流れがあります。",
    "バランス感覚が冴えています。",
    "小さな挑戦にも適したタイミングです。",
    "周囲との協調が大切になります。",
    "あなたのペースでしっかり進める日です。",
    "結果よりプロセスを大事にしましょう。",
    "人間関係が穏やかに進みます。",
    "自信を持って進むと良いでしょう。",
    "努力が形になりやすい日です。",
    "冷静さが良い方向へ導きます。",
    "自然と良い選択ができます。",
    "過去の努力が支えになります。",
    "計画通りに物事が運びやすいです。",
    "優しさが相手にも伝わります。",
    "安定した気持ちが運を高めます。",
    "一歩前進するチャンスです。",
    "物事がちょうど良く整い始めます。",
    "あなたらしさが輝きます。",
    "丁寧な行動が良い未来を呼びます。",
    "安心して進んで大丈夫です。",
];

pub const LOW: [&str; 20] = [
    "今日はゆっくり休んで、自分を労わる時間を持ちましょう。",
    "小さな目標を立てて、一歩ずつ進むことが大切です。",
    "他人に頼ることも勇気のひとつです。相談してみましょう。",
    "過去の失敗を振り返り、次に活かしましょう。",
    "心を落ち着けて、深呼吸してみましょう。",
    "今日は新しいことに挑戦するより、準備に専念しましょう。",
    "感謝の気持ちを言葉にしてみると運気が上がります。",
    "自分に優しい言葉をかけてあげましょう。",
    "無理に動かず、体と心の声に耳を傾けましょう。",
    "計画を見直すのに適した日です。",
    "小さな成功を認めることがモチベーションになります。",
    "好きな音楽を聴いてリラックスしましょう。",
    "今日は一歩引いて物事を観察する日です。",
    "自分の感情を紙に書き出して整理しましょう。",
    "軽い運動やストレッチで心身をリフレッシュ。",
    "信頼できる人と話すことで心が軽くなります。",
    "少しの工夫で生活のリズムを整えましょう。",
    "笑顔を意識して過ごすと小さな幸運が訪れます。",
    "焦らず、ペースを守ることが大切です。",
    "今日の気づきをメモして明日につなげましょう。",
];

pub const NEEDS_IMPROVEMENT: [&str; 20] = [
    "今日は静かに過ごすことで運が整い始めます。",
    "焦らずに準備を整えることで未来が開けます。",
    "ゆっくり深呼吸し、気持ちを落ち着かせましょう。",
    "無理をせず、ほんの少し前に踏み出すだけで十分です。",
    "今は種まきの時期です。未来に向けて準備を。",
    "心をリセットすることで良い流れが生まれます。",
    "今日の積み重ねが明日の幸運を呼びます。",
    "静かな時間が運を整えてくれます。",
    "目標を見直すのに最適なタイミングです。",
    "慎重に考えることで良い兆しが見えてきます。",
    "ゆったりと過ごすとエネルギーが回復します。",
    "環境を整えるだけで運が向上します。",
    "あなたの心が整うにつれて運も整います。",
    "焦らず丁寧に動くことで未来が良くなります。",
    "今日は守りの姿勢が吉です。",
    "不要なものを整理すると、運の流れが良くなります。",
    "今は静かに進むことが最善です。",
    "小さな行動が幸運のきっかけになります。",
    "準備を丁寧に行うことで未来が明るくなります。",
    "明日に向けて運の地盤を固める日です。",
];
