use crate::language::Language;

/// Reply text per language. Languages without their own text use English.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalizedReply {
    pub english: &'static str,
    pub hindi: &'static str,
}

impl LocalizedReply {
    pub(crate) fn text(&self, language: Language) -> &'static str {
        match language {
            Language::Hindi => self.hindi,
            _ => self.english,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Topic {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: LocalizedReply,
}

pub(crate) const FALLBACK: LocalizedReply = LocalizedReply {
    english: "I can help with government schemes, scholarships, studies, careers and wellbeing. Could you tell me a little more about what you need?",
    hindi: "मैं सरकारी योजनाओं, छात्रवृत्ति, पढ़ाई, करियर और स्वास्थ्य में आपकी मदद कर सकता हूँ। कृपया बताएं कि आपको किस चीज़ की ज़रूरत है?",
};

// Order is precedence: the first topic with a matching keyword answers.
pub(crate) const TOPICS: &[Topic] = &[
    Topic {
        key: "greeting",
        keywords: &["hello", "namaste", "namaskar", "नमस्ते", "नमस्कार"],
        reply: LocalizedReply {
            english: "Namaste! I am your AI for Bharat assistant. Ask me about government schemes, scholarships, study plans or career options.",
            hindi: "नमस्ते! मैं आपका एआई फॉर भारत सहायक हूँ। सरकारी योजनाओं, छात्रवृत्ति, पढ़ाई या करियर के बारे में पूछें।",
        },
    },
    Topic {
        key: "scholarship",
        keywords: &["scholarship", "chhatravritti", "छात्रवृत्ति"],
        reply: LocalizedReply {
            english: "The National Scholarship Portal (scholarships.gov.in) lists central and state scholarships from class 1 to post-graduation. Keep your Aadhaar, income certificate, mark sheets and bank details ready.",
            hindi: "राष्ट्रीय छात्रवृत्ति पोर्टल (scholarships.gov.in) पर कक्षा 1 से स्नातकोत्तर तक की छात्रवृत्तियाँ उपलब्ध हैं। आधार, आय प्रमाण पत्र, अंक पत्र और बैंक विवरण तैयार रखें।",
        },
    },
    Topic {
        key: "farming",
        keywords: &["farmer", "kisan", "crop", "agriculture", "किसान", "फसल"],
        reply: LocalizedReply {
            english: "Farmers can apply for PM-KISAN (₹6,000 per year) and crop insurance under PM Fasal Bima Yojana. Use the eligibility checker with occupation 'farmer' to see both.",
            hindi: "किसान पीएम-किसान (₹6,000 प्रति वर्ष) और प्रधानमंत्री फसल बीमा योजना के लिए आवेदन कर सकते हैं। दोनों देखने के लिए पात्रता जाँच में व्यवसाय 'किसान' चुनें।",
        },
    },
    Topic {
        key: "health",
        keywords: &["health", "hospital", "ayushman", "medical", "स्वास्थ्य", "अस्पताल"],
        reply: LocalizedReply {
            english: "Ayushman Bharat PM-JAY gives ₹5 lakh of hospital cover per family per year. Households earning below ₹5 lakh a year can check eligibility at the nearest Common Service Centre.",
            hindi: "आयुष्मान भारत पीएम-जेएवाई प्रति परिवार प्रति वर्ष ₹5 लाख का अस्पताल कवर देता है। ₹5 लाख से कम वार्षिक आय वाले परिवार नज़दीकी सीएससी पर पात्रता जाँच सकते हैं।",
        },
    },
    Topic {
        key: "pension",
        keywords: &["pension", "retire", "पेंशन"],
        reply: LocalizedReply {
            english: "Atal Pension Yojana guarantees ₹1,000 to ₹5,000 a month from age 60 for citizens who join between 18 and 40. Enrol at your bank branch.",
            hindi: "अटल पेंशन योजना में 18 से 40 वर्ष की आयु में जुड़ने पर 60 वर्ष के बाद ₹1,000 से ₹5,000 मासिक पेंशन मिलती है। अपनी बैंक शाखा में नामांकन करें।",
        },
    },
    Topic {
        key: "housing",
        keywords: &["housing", "house", "awas", "home loan", "घर", "आवास"],
        reply: LocalizedReply {
            english: "Pradhan Mantri Awas Yojana offers interest subsidy on home loans for EWS, LIG and MIG households buying their first pucca house.",
            hindi: "प्रधानमंत्री आवास योजना पहली बार पक्का घर खरीदने वाले ईडब्ल्यूएस, एलआईजी और एमआईजी परिवारों को गृह ऋण पर ब्याज सब्सिडी देती है।",
        },
    },
    Topic {
        key: "schemes",
        keywords: &["scheme", "yojana", "government", "योजना", "सरकारी"],
        reply: LocalizedReply {
            english: "There are schemes for education, health, agriculture, business, housing, employment and social security. Open Government Schemes and use the eligibility checker to see which ones fit you.",
            hindi: "शिक्षा, स्वास्थ्य, कृषि, व्यवसाय, आवास, रोज़गार और सामाजिक सुरक्षा के लिए योजनाएं हैं। सरकारी योजनाएं खोलें और पात्रता जाँच से अपने लिए उपयुक्त योजनाएं देखें।",
        },
    },
    Topic {
        key: "career",
        keywords: &["job", "career", "resume", "interview", "skill", "नौकरी", "करियर"],
        reply: LocalizedReply {
            english: "Skill India (PMKVY) offers free certified training for ages 15 to 45. The Career Guidance section has course suggestions, growing career paths and resume tips.",
            hindi: "स्किल इंडिया (पीएमकेवीवाई) 15 से 45 वर्ष के युवाओं को मुफ़्त प्रमाणित प्रशिक्षण देता है। करियर मार्गदर्शन में कोर्स, करियर विकल्प और रिज़्यूमे सुझाव देखें।",
        },
    },
    Topic {
        key: "study",
        keywords: &[
            "study", "studies", "exam", "homework", "math", "science", "पढ़ाई", "परीक्षा",
        ],
        reply: LocalizedReply {
            english: "Try 45 minutes of focused study followed by a 10 minute break, and solve a few practice problems every day. The Study Planner can track your sessions.",
            hindi: "45 मिनट ध्यान से पढ़ें और फिर 10 मिनट का विराम लें, और रोज़ कुछ अभ्यास प्रश्न हल करें। अध्ययन योजना में अपने सत्र दर्ज करें।",
        },
    },
    Topic {
        key: "wellness",
        keywords: &["stress", "anxiety", "worried", "sad", "sleep", "तनाव", "चिंता"],
        reply: LocalizedReply {
            english: "It is okay to feel this way. Take regular breaks, drink water, sleep 7 to 8 hours and talk to someone you trust. Tele-MANAS is free on 14416 if you need to talk to a counsellor.",
            hindi: "ऐसा महसूस करना सामान्य है। नियमित विराम लें, पानी पिएं, 7 से 8 घंटे सोएं और किसी भरोसेमंद व्यक्ति से बात करें। परामर्शदाता से बात करने के लिए टेली-मानस 14416 निःशुल्क है।",
        },
    },
    Topic {
        key: "thanks",
        keywords: &["thank", "dhanyavad", "shukriya", "धन्यवाद", "शुक्रिया"],
        reply: LocalizedReply {
            english: "You're welcome! Ask me anything else whenever you need.",
            hindi: "आपका स्वागत है! जब भी ज़रूरत हो, कुछ भी पूछें।",
        },
    },
];
